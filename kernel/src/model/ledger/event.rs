use crate::model::id::UserId;
use derive_new::new;

#[derive(new, Debug)]
pub struct Deposit {
    pub user_id: UserId,
    pub amount: i64,
    pub reason: String,
}
