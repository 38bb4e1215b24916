mod games_vm;
mod question_vm;
mod time_fmt;

pub use games_vm::{GameRowVm, map_game_rows};
pub use question_vm::{AnswerOptionVm, QuestionCardVm, QuestionVm};
pub use time_fmt::{format_datetime, format_optional_datetime};
