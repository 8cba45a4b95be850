//! The learning-flow state machine.
//!
//! One controller instance owns the whole client-side state: which screen
//! is showing, the flashcard deck being browsed, the quiz in progress and
//! its accumulated answers. All transitions happen on user-triggered
//! events; network calls go through the [`ApiClient`] and nothing else.

use tracing::debug;
use wordtrail::types::{AnswerRecord, ProgressSummary, QuizQuestionView, QuizScore, Vocabulary};

use crate::api::{ApiClient, ClientError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Vocabulary,
    Quiz,
    Results,
}

/// The flashcard deck for one topic, with a cursor and a flipped flag.
#[derive(Debug)]
pub struct VocabularyView {
    pub topic_id: i64,
    pub cards: Vec<Vocabulary>,
    pub cursor: usize,
    pub flipped: bool,
}

impl VocabularyView {
    pub fn current(&self) -> Option<&Vocabulary> {
        self.cards.get(self.cursor)
    }
}

/// A quiz in progress: the question sequence, the answer selected but not
/// yet confirmed, and every answer finalized so far.
#[derive(Debug)]
pub struct QuizView {
    pub topic_id: i64,
    pub questions: Vec<QuizQuestionView>,
    pub cursor: usize,
    pub pending: Option<String>,
    pub answers: Vec<AnswerRecord>,
}

impl QuizView {
    pub fn current(&self) -> Option<&QuizQuestionView> {
        self.questions.get(self.cursor)
    }
}

/// What happened when the learner pressed "Next" on a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Nothing was selected yet, so the press was a no-op.
    Ignored,
    /// The answer was recorded and the next question is showing.
    Advanced,
    /// The last answer was recorded; the attempt is ready to submit.
    Completed,
}

pub struct ViewController {
    pub api: ApiClient,
    pub screen: Screen,
    pub vocabulary: Option<VocabularyView>,
    pub quiz: Option<QuizView>,
    pub last_score: Option<QuizScore>,
    pub progress: Option<ProgressSummary>,
}

impl ViewController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            screen: Screen::Dashboard,
            vocabulary: None,
            quiz: None,
            last_score: None,
            progress: None,
        }
    }

    /// Loads a topic's flashcards and shows the first one, front side up.
    pub async fn open_vocabulary(&mut self, topic_id: i64) -> Result<(), ClientError> {
        let cards = self.api.vocabularies(topic_id).await?;
        debug!(topic_id, count = cards.len(), "Opened vocabulary deck");
        self.vocabulary = Some(VocabularyView {
            topic_id,
            cards,
            cursor: 0,
            flipped: false,
        });
        self.screen = Screen::Vocabulary;
        Ok(())
    }

    pub fn flip_card(&mut self) {
        if let Some(view) = self.vocabulary.as_mut() {
            view.flipped = !view.flipped;
        }
    }

    /// Moves to the next card. Past the last card the cursor stays put so
    /// the learner keeps seeing the final card.
    pub fn next_card(&mut self) {
        if let Some(view) = self.vocabulary.as_mut() {
            if view.cursor + 1 < view.cards.len() {
                view.cursor += 1;
                view.flipped = false;
            }
        }
    }

    pub fn previous_card(&mut self) {
        if let Some(view) = self.vocabulary.as_mut() {
            if view.cursor > 0 {
                view.cursor -= 1;
                view.flipped = false;
            }
        }
    }

    /// Loads the topic's questions and starts a fresh attempt.
    pub async fn start_quiz(&mut self, topic_id: i64) -> Result<(), ClientError> {
        let questions = self.api.quiz(topic_id).await?;
        debug!(topic_id, count = questions.len(), "Started quiz");
        self.quiz = Some(QuizView {
            topic_id,
            questions,
            cursor: 0,
            pending: None,
            answers: Vec::new(),
        });
        self.last_score = None;
        self.screen = Screen::Quiz;
        Ok(())
    }

    /// Records the selected option label without finalizing it. Selecting
    /// again before "Next" replaces the earlier choice.
    pub fn select_option(&mut self, label: &str) {
        if let Some(quiz) = self.quiz.as_mut() {
            if quiz.current().is_some() {
                quiz.pending = Some(label.to_string());
            }
        }
    }

    /// Finalizes the pending selection against the current question and
    /// advances. On the last question the attempt becomes ready for
    /// [`submit`](Self::submit) instead of advancing further.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let Some(quiz) = self.quiz.as_mut() else {
            return AdvanceOutcome::Ignored;
        };
        let Some(selected) = quiz.pending.take() else {
            return AdvanceOutcome::Ignored;
        };
        let Some(question) = quiz.questions.get(quiz.cursor) else {
            return AdvanceOutcome::Ignored;
        };

        quiz.answers.push(AnswerRecord {
            quiz_id: question.id,
            selected_answer: selected.clone(),
            correct_answer: question.correct_answer.clone(),
            is_correct: selected == question.correct_answer,
        });

        if quiz.cursor + 1 < quiz.questions.len() {
            quiz.cursor += 1;
            AdvanceOutcome::Advanced
        } else {
            AdvanceOutcome::Completed
        }
    }

    /// Submits the finalized answers, shows the results screen and
    /// refreshes the progress statistics.
    pub async fn submit(&mut self) -> Result<QuizScore, ClientError> {
        let answers = match &self.quiz {
            Some(quiz) => quiz.answers.clone(),
            None => Vec::new(),
        };
        let score = self.api.submit_quiz(&answers).await?;
        debug!(score = score.score, "Quiz submitted");
        self.last_score = Some(score.clone());
        self.screen = Screen::Results;
        self.progress = Some(self.api.progress().await?);
        Ok(score)
    }

    pub async fn refresh_progress(&mut self) -> Result<(), ClientError> {
        self.progress = Some(self.api.progress().await?);
        Ok(())
    }

    /// Drops all flashcard and quiz state and returns to the dashboard.
    pub fn return_to_dashboard(&mut self) {
        self.vocabulary = None;
        self.quiz = None;
        self.last_score = None;
        self.screen = Screen::Dashboard;
    }
}
