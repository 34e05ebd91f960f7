use cliclack::log;

// Console output is best effort; a closed stdout must not fail a run.

pub fn print_intro(title: &str) {
    let _ = cliclack::intro(title);
}

pub fn print_outro(message: &str) {
    let _ = cliclack::outro(message);
}

pub fn print_info(message: &str) {
    let _ = log::info(message);
}

pub fn print_success(message: &str) {
    let _ = log::success(message);
}

pub fn print_warning(message: &str) {
    let _ = log::warning(message);
}

pub fn print_remark(message: &str) {
    let _ = log::remark(message);
}
