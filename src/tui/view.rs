//! Window rendering.

use super::state::{AppState, MAX_LENGTH, MIN_LENGTH, Notice};
use crate::pass::CharacterClass;
use crate::terminal::{
    BOLD, GREY, RESET, box_bottom, box_line, box_line_center, box_pair, box_top, checkbox, flush,
    print_error, print_rule, print_success, slider,
};

const SLIDER_WIDTH: usize = 30;

pub fn render(state: &AppState) {
    box_top("Password Generator");
    box_line_center("Create a secure, random password instantly!");
    print_rule();

    box_line("Password");
    match state.password.as_ref() {
        Some(p) if !p.is_empty() => box_pair(&format!("  {BOLD}{}{RESET}", p.as_str()), "[c] copy"),
        _ => box_pair(&format!("  {GREY}press Enter to generate{RESET}"), "[c] copy"),
    }
    box_line("");

    box_line(&format!("Length: {}", state.config.length));
    box_pair(
        &format!("  {}", slider(state.config.length, MIN_LENGTH, MAX_LENGTH, SLIDER_WIDTH)),
        &format!("{MIN_LENGTH}-{MAX_LENGTH}"),
    );
    box_line("");

    for (i, class) in CharacterClass::ALL.iter().enumerate() {
        box_pair(
            &format!("  {}) {}", i + 1, class.label()),
            checkbox(state.config.classes.contains(*class)),
        );
    }

    print_rule();
    box_line_center("[Enter] Generate   [c] Copy   [q] Quit");
    box_line_center("[←/→] Length   [1-4] Toggle");
    box_bottom();

    match state.notice.as_ref() {
        Some(Notice::Success(msg)) => print_success(msg),
        Some(notice) => print_error(notice.text()),
        None => println!(),
    }
    flush();
}
