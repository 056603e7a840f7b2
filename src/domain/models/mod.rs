pub mod endpoint;
pub mod output;
pub mod recipient;
pub mod request;
pub mod response;
pub mod settings;

pub use endpoint::EndpointPolicy;
pub use output::{
    DecomposedResponse, InvalidNumberErrorRow, MessagePartRow, MessageRow, OutputTable, StatsRow,
};
pub use recipient::{Batch, ButtonObject, IMMEDIATE_SCHEDULE, RecipientRow, RecipientTable};
pub use request::{
    ChannelPayload, NumberEntry, RequestBody, SMS_SENDER_ID_KIND, SmsChannel, ViberChannel,
};
pub use response::{ItemOutcome, ProviderResponse, ResponseItem, StatusTotals};
pub use settings::{ChannelSelection, Credentials, DuplicatesCheck, MessageType, Settings};
