//! The quiz session state machine.
//!
//! A session is either active (accepting digits and submissions) or
//! finished. Every submission grades the input buffer against the current
//! question and then either moves to the next question or finishes; there
//! is no way back to active, a new session has to be started instead.

use crate::quiz::config::SessionConfig;
use crate::quiz::operands::{OperandSource, RandomOperands, MAX_OPERAND};

/// Outcome of [`QuizSession::submit_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionResult {
    /// More questions remain; the next one has been generated.
    Continue,
    /// The last question was graded. Carries the final score.
    Finished(u32),
}

/// Read-only view of a session, taken after each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub score: u32,
    pub current_question: u32,
    pub question_count: u32,
    pub first_operand: u32,
    pub second_operand: u32,
    pub input: String,
    pub finished: bool,
}

pub struct QuizSession {
    config: SessionConfig,
    score: u32,
    current_question: u32,
    first_operand: u32,
    second_operand: u32,
    input: String,
    finished: bool,
    operands: Box<dyn OperandSource>,
}

impl QuizSession {
    /// Starts a session whose operands come from the OS-seeded RNG.
    pub fn start(config: SessionConfig) -> Self {
        Self::start_with(config, RandomOperands::new())
    }

    /// Starts a session with an injected operand source.
    pub fn start_with(config: SessionConfig, operands: impl OperandSource + 'static) -> Self {
        let mut session = Self {
            config,
            score: 0,
            current_question: 1,
            first_operand: config.table(),
            second_operand: 0,
            input: String::new(),
            finished: false,
            operands: Box::new(operands),
        };
        session.generate_question();
        tracing::info!(
            table = config.table(),
            questions = config.question_count(),
            "Quiz session started"
        );
        session
    }

    /// Draws a new second operand for the current question.
    pub fn generate_question(&mut self) {
        self.first_operand = self.config.table();
        let drawn = self.operands.next_operand();
        if drawn > MAX_OPERAND {
            tracing::warn!(drawn, "Operand source returned out-of-range value, clamping");
        }
        self.second_operand = drawn.min(MAX_OPERAND);
        tracing::debug!(
            question = self.current_question,
            first = self.first_operand,
            second = self.second_operand,
            "Generated question"
        );
    }

    /// Appends a keypad digit to the answer being typed.
    pub fn append_digit(&mut self, digit: char) {
        if self.finished {
            tracing::warn!("Digit ignored: session already finished");
            return;
        }
        if !digit.is_ascii_digit() {
            tracing::debug!(?digit, "Ignoring non-digit input");
            return;
        }
        self.input.push(digit);
    }

    pub fn delete_last_digit(&mut self) {
        if self.finished {
            return;
        }
        self.input.pop();
    }

    /// Grades the input buffer and advances the session.
    ///
    /// An empty or unparseable buffer counts as a wrong answer. Once the
    /// session has finished this does nothing and reports the final score
    /// again.
    pub fn submit_answer(&mut self) -> SubmissionResult {
        if self.finished {
            tracing::warn!("Submission ignored: session already finished");
            return SubmissionResult::Finished(self.score);
        }

        let answer = self.input.parse::<u32>().ok();
        let correct = answer == Some(self.expected_answer());
        if correct {
            self.score += 1;
        }
        tracing::debug!(
            question = self.current_question,
            ?answer,
            expected = self.expected_answer(),
            correct,
            "Graded answer"
        );
        self.input.clear();

        if self.current_question < self.config.question_count() {
            self.current_question += 1;
            self.generate_question();
            SubmissionResult::Continue
        } else {
            self.finished = true;
            tracing::info!(
                score = self.score,
                questions = self.config.question_count(),
                "Quiz session finished"
            );
            SubmissionResult::Finished(self.score)
        }
    }

    /// Product the current question is asking for.
    pub fn expected_answer(&self) -> u32 {
        self.first_operand * self.second_operand
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based index of the question being asked.
    pub fn current_question(&self) -> u32 {
        self.current_question
    }

    pub fn first_operand(&self) -> u32 {
        self.first_operand
    }

    pub fn second_operand(&self) -> u32 {
        self.second_operand
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            score: self.score,
            current_question: self.current_question,
            question_count: self.config.question_count(),
            first_operand: self.first_operand,
            second_operand: self.second_operand,
            input: self.input.clone(),
            finished: self.finished,
        }
    }
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("config", &self.config)
            .field("score", &self.score)
            .field("current_question", &self.current_question)
            .field("first_operand", &self.first_operand)
            .field("second_operand", &self.second_operand)
            .field("input", &self.input)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: u32) -> impl OperandSource {
        move || value
    }

    fn type_answer(session: &mut QuizSession, answer: u32) {
        for digit in answer.to_string().chars() {
            session.append_digit(digit);
        }
    }

    #[test]
    fn fresh_session_is_at_question_one() {
        let config = SessionConfig::new(7, 15).unwrap();
        let session = QuizSession::start(config);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_question(), 1);
        assert_eq!(session.input(), "");
        assert!(!session.is_finished());
        assert_eq!(session.first_operand(), 7);
        assert!(session.second_operand() <= MAX_OPERAND);
    }

    #[test]
    fn delete_on_empty_buffer_is_noop() {
        let mut session = QuizSession::start_with(SessionConfig::default(), fixed(4));
        let before = session.snapshot();
        session.delete_last_digit();
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn delete_removes_only_the_last_digit() {
        let mut session = QuizSession::start_with(SessionConfig::default(), fixed(4));
        session.append_digit('1');
        session.append_digit('2');
        session.delete_last_digit();
        assert_eq!(session.input(), "1");
    }

    #[test]
    fn non_digits_never_reach_the_buffer() {
        let mut session = QuizSession::start_with(SessionConfig::default(), fixed(4));
        session.append_digit('x');
        session.append_digit('-');
        session.append_digit('8');
        assert_eq!(session.input(), "8");
    }

    #[test]
    fn empty_submission_is_a_wrong_answer() {
        let mut session = QuizSession::start_with(SessionConfig::new(0, 5).unwrap(), fixed(0));
        // 0 x 0 = 0, but an empty buffer must not parse as zero.
        assert_eq!(session.submit_answer(), SubmissionResult::Continue);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_question(), 2);
    }

    #[test]
    fn leading_zeros_still_match() {
        let mut session = QuizSession::start_with(SessionConfig::new(3, 5).unwrap(), fixed(4));
        for digit in "012".chars() {
            session.append_digit(digit);
        }
        session.submit_answer();
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn overflowing_input_is_wrong_not_fatal() {
        let mut session = QuizSession::start_with(SessionConfig::new(3, 5).unwrap(), fixed(4));
        for _ in 0..30 {
            session.append_digit('9');
        }
        assert_eq!(session.submit_answer(), SubmissionResult::Continue);
        assert_eq!(session.score(), 0);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn out_of_range_operand_is_clamped() {
        let session = QuizSession::start_with(SessionConfig::default(), fixed(99));
        assert_eq!(session.second_operand(), MAX_OPERAND);
    }

    #[test]
    fn finished_session_ignores_further_input() {
        let mut session = QuizSession::start_with(SessionConfig::new(2, 5).unwrap(), fixed(1));
        for _ in 0..5 {
            type_answer(&mut session, 2);
            session.submit_answer();
        }
        assert!(session.is_finished());
        let before = session.snapshot();

        session.append_digit('4');
        session.delete_last_digit();
        assert_eq!(session.submit_answer(), SubmissionResult::Finished(5));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn snapshot_reflects_accessors() {
        let mut session = QuizSession::start_with(SessionConfig::new(6, 10).unwrap(), fixed(8));
        session.append_digit('4');
        let snapshot = session.snapshot();
        assert_eq!(snapshot.first_operand, 6);
        assert_eq!(snapshot.second_operand, 8);
        assert_eq!(snapshot.question_count, 10);
        assert_eq!(snapshot.input, "4");
        assert_eq!(session.expected_answer(), 48);
    }
}
