use crate::model::id::{BusinessId, ModelId};
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateUnit {
    pub business_id: BusinessId,
    pub model_id: ModelId,
    pub label: String,
    pub color: String,
    pub hourly_rate_override: Option<i64>,
}
