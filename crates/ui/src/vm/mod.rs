mod quiz_vm;
mod summary_vm;
mod time_fmt;

pub use quiz_vm::{IndicatorVm, QuizVm};
pub use summary_vm::{BarVm, SliceVm, SummaryVm};
pub use time_fmt::{format_clock, format_seconds};
