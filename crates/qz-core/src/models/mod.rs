pub mod question;
pub mod question_type;
pub mod questionary;
pub mod questionary_options;
pub mod rating_scale;
pub mod respondent;
