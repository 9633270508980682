use chief_core::Credential;

use super::Storage;
use super::items::ItemRow;
use crate::error::StorageError;
use crate::keys::{CRED_PREFIX, credential_sk, expiry_gsi, type_gsi, user_pk};

impl Storage {
    pub fn save_credential(&self, user_id: &str, credential: &Credential) -> Result<(), StorageError> {
        let pk = user_pk(user_id);
        let sk = credential_sk(&credential.name);
        let row = ItemRow::new(&pk, &sk).indexed(
            type_gsi(&credential.credential_type),
            expiry_gsi(credential.expiration_date.as_deref()),
        );
        self.put_item(&row, credential)
    }

    /// Look up by name; the lookup is normalized the same way as the key.
    pub fn get_credential(&self, user_id: &str, name: &str) -> Result<Option<Credential>, StorageError> {
        self.get_item(&user_pk(user_id), &credential_sk(name))
    }

    pub fn list_credentials(&self, user_id: &str) -> Result<Vec<Credential>, StorageError> {
        self.query_partition(&user_pk(user_id), CRED_PREFIX)
    }
}
