pub mod builder;
pub mod error;
pub mod models;
pub mod timestamp;


pub use builder::builder_action::BuilderAction;
pub use builder::history_state::HistoryState;
pub use builder::reducer::reduce;
pub use error::{CoreError, Result as CoreResult};
pub use models::question::Question;
pub use models::question_type::QuestionType;
pub use models::questionary::Questionary;
pub use models::questionary_options::QuestionaryOptions;
pub use models::rating_scale::RATING_SCALE;
pub use models::respondent::Respondent;
pub use timestamp::{BACKEND_DATETIME_FORMAT, format_backend_timestamp, parse_backend_timestamp};

pub use error_location::ErrorLocation;
