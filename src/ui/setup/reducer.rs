use crate::quiz::{MAX_QUESTIONS, MAX_TABLE, MIN_QUESTIONS, QUESTION_STEP};
use crate::ui::mvi::Reducer;
use crate::ui::setup::intent::SetupIntent;
use crate::ui::setup::state::{SetupField, SetupState};

pub struct SetupReducer;

impl Reducer for SetupReducer {
    type State = SetupState;
    type Intent = SetupIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SetupIntent::FocusPrev => {
                let len = SetupField::ALL.len();
                let index = (state.focused.index() + len - 1) % len;
                SetupState {
                    focused: SetupField::ALL[index],
                    ..state
                }
            }
            SetupIntent::FocusNext => {
                let index = (state.focused.index() + 1) % SetupField::ALL.len();
                SetupState {
                    focused: SetupField::ALL[index],
                    ..state
                }
            }
            SetupIntent::Increment => match state.focused {
                SetupField::Table => SetupState {
                    table: (state.table + 1).min(MAX_TABLE),
                    ..state
                },
                SetupField::Questions => SetupState {
                    question_count: (state.question_count + QUESTION_STEP).min(MAX_QUESTIONS),
                    ..state
                },
                SetupField::Start => state,
            },
            SetupIntent::Decrement => match state.focused {
                SetupField::Table => SetupState {
                    table: state.table.saturating_sub(1),
                    ..state
                },
                SetupField::Questions => SetupState {
                    question_count: state
                        .question_count
                        .saturating_sub(QUESTION_STEP)
                        .max(MIN_QUESTIONS),
                    ..state
                },
                SetupField::Start => state,
            },
        }
    }
}
