mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod home;
pub use home::Home;

mod family;
pub use family::FamilyView;

mod questions;
pub use questions::Questions;

mod question_detail;
pub use question_detail::QuestionDetail;

mod settings;
pub use settings::Settings;

mod admin_questions;
pub use admin_questions::AdminQuestions;
