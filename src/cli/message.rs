use crate::error::AppError;
use crate::store::Store;
use crate::view::columns::message_link;

pub fn message(store: &Store, id: &str) -> anyhow::Result<()> {
    let record = store
        .get_request(id)?
        .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;

    match message_link(&record) {
        Some(link) => {
            println!("{}", link.url);
            Ok(())
        }
        None => anyhow::bail!("Record '{}' has no phone number to message", id),
    }
}
