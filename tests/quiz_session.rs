use mathquizzler::quiz::{
    OperandSource, QuizSession, RandomOperands, SessionConfig, SubmissionResult, MAX_OPERAND,
};
use std::collections::VecDeque;

/// Operand source replaying a fixed script, then repeating the last value.
fn scripted(values: &[u32]) -> impl OperandSource {
    let mut queue: VecDeque<u32> = values.iter().copied().collect();
    let mut last = 0;
    move || {
        if let Some(value) = queue.pop_front() {
            last = value;
        }
        last
    }
}

fn type_answer(session: &mut QuizSession, answer: u32) {
    for digit in answer.to_string().chars() {
        session.append_digit(digit);
    }
}

fn answer_correctly(session: &mut QuizSession) -> SubmissionResult {
    let expected = session.expected_answer();
    type_answer(session, expected);
    session.submit_answer()
}

#[test]
fn fresh_sessions_start_clean_for_every_config() {
    for table in 0..=12 {
        for count in [5, 10, 15, 20] {
            let session = QuizSession::start(SessionConfig::new(table, count).unwrap());
            let snapshot = session.snapshot();
            assert_eq!(snapshot.score, 0);
            assert_eq!(snapshot.current_question, 1);
            assert_eq!(snapshot.input, "");
            assert!(!snapshot.finished);
            assert_eq!(snapshot.first_operand, table);
            assert!(snapshot.second_operand <= MAX_OPERAND);
        }
    }
}

#[test]
fn table_five_walkthrough() {
    let config = SessionConfig::new(5, 5).unwrap();
    let mut session = QuizSession::start_with(config, scripted(&[3, 7, 0, 12, 1]));
    assert_eq!(session.first_operand(), 5);
    assert_eq!(session.second_operand(), 3);

    session.append_digit('1');
    session.append_digit('5');
    assert_eq!(session.submit_answer(), SubmissionResult::Continue);
    assert_eq!(session.score(), 1);
    assert_eq!(session.current_question(), 2);
    assert_eq!(session.input(), "");

    let mut result = SubmissionResult::Continue;
    for _ in 0..4 {
        assert_eq!(session.first_operand(), 5);
        result = answer_correctly(&mut session);
    }
    assert_eq!(result, SubmissionResult::Finished(5));
    assert!(session.is_finished());
}

#[test]
fn one_miss_scores_four_wherever_it_happens() {
    for missed in 0..5 {
        let config = SessionConfig::new(8, 5).unwrap();
        let mut session = QuizSession::start_with(config, scripted(&[2, 4, 6, 8, 10]));
        let mut result = SubmissionResult::Continue;
        for question in 0..5 {
            if question == missed {
                let wrong = session.expected_answer() + 1;
                type_answer(&mut session, wrong);
                result = session.submit_answer();
            } else {
                result = answer_correctly(&mut session);
            }
        }
        assert_eq!(result, SubmissionResult::Finished(4), "missed question {missed}");
    }
}

#[test]
fn exactly_question_count_submissions_finish() {
    for count in [5, 10, 15, 20] {
        let mut session =
            QuizSession::start_with(SessionConfig::new(3, count).unwrap(), RandomOperands::seeded(1));
        for _ in 1..count {
            assert_eq!(session.submit_answer(), SubmissionResult::Continue);
            assert!(!session.is_finished());
        }
        assert_eq!(session.submit_answer(), SubmissionResult::Finished(0));
        assert!(session.is_finished());
        assert_eq!(session.current_question(), count);
    }
}

#[test]
fn score_never_runs_ahead_of_questions() {
    let config = SessionConfig::new(12, 20).unwrap();
    let mut session = QuizSession::start_with(config, RandomOperands::seeded(99));
    for question in 0..20 {
        if question % 3 == 0 {
            type_answer(&mut session, 1);
            session.submit_answer();
        } else {
            answer_correctly(&mut session);
        }
        assert_eq!(session.input(), "");
        if !session.is_finished() {
            assert!(session.score() <= session.current_question() - 1);
        }
        assert!(session.score() <= config.question_count());
    }
    // Questions 0, 3, 6, 9, 12, 15, 18 were answered wrong.
    assert_eq!(session.score(), 13);
}

#[test]
fn random_operands_stay_in_range_across_a_session() {
    let mut session = QuizSession::start(SessionConfig::new(6, 20).unwrap());
    while !session.is_finished() {
        assert!(session.second_operand() <= MAX_OPERAND);
        assert_eq!(session.first_operand(), 6);
        session.submit_answer();
    }
}

#[test]
fn zero_table_answers_are_always_zero() {
    let mut session =
        QuizSession::start_with(SessionConfig::new(0, 5).unwrap(), RandomOperands::seeded(3));
    while !session.is_finished() {
        session.append_digit('0');
        session.submit_answer();
    }
    assert_eq!(session.score(), 5);
}
