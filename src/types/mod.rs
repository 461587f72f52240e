pub mod api_error;
pub mod order;
pub mod payload;
pub mod send_attempt;
pub mod status_change;

#[allow(unused_imports)]
pub use api_error::{ApiErrorCode, ApiErrorResponse};
#[allow(unused_imports)]
pub use order::{Order, OrderAddress, OrderLineItem};
#[allow(unused_imports)]
pub use payload::{OrderPayload, PayloadBilling, PayloadLineItem, PayloadShipping};
#[allow(unused_imports)]
pub use send_attempt::{SendAttemptRecord, SendAttemptView, SendStatus};
#[allow(unused_imports)]
pub use status_change::{StatusChangeEvent, StatusChangeOutcome, StatusChangeResponse};
