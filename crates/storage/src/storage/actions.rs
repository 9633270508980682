use chief_core::{ActionItem, ActionStatus};

use super::items::{ItemRow, put_with};
use super::{Storage, get_conn};
use crate::error::StorageError;
use crate::keys::{ACTION_PREFIX, action_pk, due_gsi, status_gsi, user_pk};

fn action_row<'a>(pk: &'a str, sk: &'a str, action: &ActionItem) -> ItemRow<'a> {
    ItemRow::new(pk, sk).indexed(status_gsi(action.status), due_gsi(action.due_date.as_deref()))
}

impl Storage {
    /// Save or replace one action item; its status decides the index entry.
    pub fn save_action(&self, user_id: &str, action: &ActionItem) -> Result<(), StorageError> {
        let pk = action_pk(&action.id);
        let sk = user_pk(user_id);
        self.put_item(&action_row(&pk, &sk, action), action)
    }

    /// Save a batch of action items in one transaction.
    pub fn save_actions(&self, user_id: &str, actions: &[ActionItem]) -> Result<(), StorageError> {
        if actions.is_empty() {
            return Ok(());
        }
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let sk = user_pk(user_id);
        for action in actions {
            let pk = action_pk(&action.id);
            put_with(&tx, &action_row(&pk, &sk, action), action)?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn get_action(&self, user_id: &str, id: &str) -> Result<Option<ActionItem>, StorageError> {
        self.get_item(&action_pk(id), &user_pk(user_id))
    }

    /// Actions in `status` for `user_id`, ordered by due date (undated last).
    pub fn actions_by_status(
        &self,
        user_id: &str,
        status: ActionStatus,
    ) -> Result<Vec<ActionItem>, StorageError> {
        let sk = user_pk(user_id);
        self.query_index(&status_gsi(status), ACTION_PREFIX, Some(&sk))
    }
}
