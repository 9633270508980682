use chief_core::Contact;

use super::Storage;
use super::items::ItemRow;
use crate::error::StorageError;
use crate::keys::{CONTACT_PREFIX, contact_sk, user_pk};

impl Storage {
    pub fn save_contact(&self, user_id: &str, contact: &Contact) -> Result<(), StorageError> {
        let pk = user_pk(user_id);
        let sk = contact_sk(&contact.name);
        self.put_item(&ItemRow::new(&pk, &sk), contact)
    }

    pub fn get_contact(&self, user_id: &str, name: &str) -> Result<Option<Contact>, StorageError> {
        self.get_item(&user_pk(user_id), &contact_sk(name))
    }

    pub fn list_contacts(&self, user_id: &str) -> Result<Vec<Contact>, StorageError> {
        self.query_partition(&user_pk(user_id), CONTACT_PREFIX)
    }
}
