pub(crate) mod briefing;
pub(crate) mod chat;
pub(crate) mod contacts;
pub(crate) mod creds;
pub(crate) mod docs;
pub(crate) mod notes;
pub(crate) mod seed;
pub(crate) mod serve;
