use mathquizzler::quiz::SessionConfig;
use mathquizzler::ui::mvi::Reducer;
use mathquizzler::ui::setup::{SetupField, SetupIntent, SetupReducer, SetupState};

fn reduce_all(state: SetupState, intents: &[SetupIntent]) -> SetupState {
    intents
        .iter()
        .fold(state, |state, intent| SetupReducer::reduce(state, *intent))
}

fn at(table: u32, question_count: u32, focused: SetupField) -> SetupState {
    SetupState {
        table,
        question_count,
        focused,
    }
}

#[test]
fn default_state_starts_the_default_session() {
    assert_eq!(
        SetupState::default().session_config().unwrap(),
        SessionConfig::default()
    );
}

#[test]
fn focus_cycles_through_rows() {
    let state = reduce_all(SetupState::default(), &[SetupIntent::FocusNext]);
    assert_eq!(state.focused, SetupField::Questions);
    let state = reduce_all(state, &[SetupIntent::FocusNext]);
    assert_eq!(state.focused, SetupField::Start);
    let state = reduce_all(state, &[SetupIntent::FocusNext]);
    assert_eq!(state.focused, SetupField::Table);
}

#[test]
fn focus_prev_wraps_to_start() {
    let state = reduce_all(SetupState::default(), &[SetupIntent::FocusPrev]);
    assert_eq!(state.focused, SetupField::Start);
}

#[test]
fn table_stepper_clamps_at_both_ends() {
    let state = reduce_all(at(11, 10, SetupField::Table), &[SetupIntent::Increment; 3]);
    assert_eq!(state.table, 12);
    let state = reduce_all(at(1, 10, SetupField::Table), &[SetupIntent::Decrement; 3]);
    assert_eq!(state.table, 0);
}

#[test]
fn question_stepper_moves_in_fives() {
    let state = reduce_all(at(2, 10, SetupField::Questions), &[SetupIntent::Increment]);
    assert_eq!(state.question_count, 15);
    let state = reduce_all(state, &[SetupIntent::Increment; 4]);
    assert_eq!(state.question_count, 20);
    let state = reduce_all(state, &[SetupIntent::Decrement; 9]);
    assert_eq!(state.question_count, 5);
}

#[test]
fn steppers_ignore_start_row() {
    let state = at(4, 15, SetupField::Start);
    let next = reduce_all(
        state.clone(),
        &[SetupIntent::Increment, SetupIntent::Decrement],
    );
    assert_eq!(next, state);
}

#[test]
fn stepping_only_touches_the_focused_field() {
    let state = reduce_all(at(4, 15, SetupField::Table), &[SetupIntent::Increment]);
    assert_eq!(state.question_count, 15);
    let state = reduce_all(
        at(4, 15, SetupField::Questions),
        &[SetupIntent::Decrement],
    );
    assert_eq!(state.table, 4);
}

#[test]
fn any_reachable_state_is_a_valid_session() {
    let intents = [
        SetupIntent::Increment,
        SetupIntent::FocusNext,
        SetupIntent::Decrement,
        SetupIntent::Decrement,
        SetupIntent::FocusPrev,
        SetupIntent::Increment,
        SetupIntent::FocusNext,
        SetupIntent::Increment,
    ];
    let mut state = SetupState::default();
    for round in 0..50 {
        state = SetupReducer::reduce(state, intents[round % intents.len()]);
        assert!(state.session_config().is_ok(), "{state:?}");
    }
}
