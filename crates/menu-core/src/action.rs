use crate::error::OpenError;
use crate::navigator::Navigator;
use crate::provider::EntryProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Back,
    Quit,
    Descend,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    JumpToStart,
    JumpToEnd,
    ToggleHelp,
}

/// Applies one action. `list_height` is the number of list rows last drawn;
/// paging uses it so page boundaries match the screen.
pub fn apply_action<P: EntryProvider + ?Sized>(
    nav: &mut Navigator,
    provider: &P,
    action: Action,
    list_height: usize,
) -> Result<(), OpenError> {
    match action {
        Action::Back => {
            nav.back();
        }
        Action::Quit => nav.quit(),
        Action::Descend => {
            nav.descend(provider)?;
        }
        Action::MoveUp => nav.current_mut().move_up(),
        Action::MoveDown => nav.current_mut().move_down(),
        Action::PageUp => nav.current_mut().page_up(list_height),
        Action::PageDown => nav.current_mut().page_down(list_height),
        Action::JumpToStart => nav.current_mut().jump_to_start(),
        Action::JumpToEnd => nav.current_mut().jump_to_end(),
        Action::ToggleHelp => nav.current_mut().toggle_help(),
    }
    Ok(())
}
