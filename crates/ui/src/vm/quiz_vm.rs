use flashquiz_core::SessionPhase;
use flashquiz_core::model::CardResponse;
use services::QuizService;

use crate::vm::time_fmt::format_clock;

/// One dot of the card strip under the flashcard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorVm {
    pub index: usize,
    pub active: bool,
    pub response: CardResponse,
}

impl IndicatorVm {
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("indicator");
        if self.active {
            class.push_str(" active");
        }
        if self.response.is_answered() {
            class.push(' ');
            class.push_str(self.response.as_str());
        }
        class
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    /// 1-based position of the current card.
    pub position: usize,
    pub total: usize,
    pub question: String,
    pub answer: String,
    pub timer: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub answered: usize,
    pub current_response: CardResponse,
    pub indicators: Vec<IndicatorVm>,
}

impl QuizVm {
    /// Snapshot of the running quiz; `None` unless a session is in progress.
    #[must_use]
    pub fn from_service(quiz: &QuizService) -> Option<Self> {
        if quiz.phase() != SessionPhase::InProgress {
            return None;
        }
        let tracker = quiz.tracker();
        let index = tracker.current_index()?;
        let card = tracker.current_card()?;

        let indicators = tracker
            .responses()
            .iter()
            .enumerate()
            .map(|(i, response)| IndicatorVm {
                index: i,
                active: i == index,
                response: *response,
            })
            .collect();

        Some(Self {
            position: index + 1,
            total: tracker.len(),
            question: card.question().to_string(),
            answer: card.answer().to_string(),
            timer: format_clock(quiz.elapsed_ms()),
            can_go_back: !tracker.is_first(),
            can_go_forward: !tracker.is_last(),
            answered: quiz.progress().answered,
            current_response: tracker.response(index).unwrap_or_default(),
            indicators,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashquiz_core::time::fixed_clock;
    use services::DeckService;

    fn started_quiz() -> QuizService {
        let text = "Gravity is the force that pulls objects toward each other. ".repeat(9);
        let deck = DeckService::default().build_from_text("notes", &text).unwrap();
        let mut quiz = QuizService::new(fixed_clock());
        quiz.start(&deck).unwrap();
        quiz
    }

    #[test]
    fn idle_quiz_has_no_view_model() {
        assert_eq!(QuizVm::from_service(&QuizService::default()), None);
    }

    #[test]
    fn first_card_disables_back_navigation() {
        let vm = QuizVm::from_service(&started_quiz()).unwrap();
        assert_eq!(vm.position, 1);
        assert_eq!(vm.total, 8);
        assert_eq!(vm.question, "What is Gravity?");
        assert!(vm.answer.starts_with("Gravity is the force"));
        assert!(!vm.can_go_back);
        assert!(vm.can_go_forward);
        assert_eq!(vm.timer, "00:00");
        assert_eq!(vm.indicators[0].class(), "indicator active");
    }

    #[test]
    fn graded_cards_are_marked_in_the_strip() {
        let mut quiz = started_quiz();
        quiz.clock_mut().advance_ms(65_000);
        quiz.answer(true).unwrap();
        quiz.answer(false).unwrap();

        let vm = QuizVm::from_service(&quiz).unwrap();
        assert_eq!(vm.position, 3);
        assert_eq!(vm.timer, "01:05");
        assert_eq!(vm.answered, 2);
        assert_eq!(vm.indicators[0].class(), "indicator correct");
        assert_eq!(vm.indicators[1].class(), "indicator incorrect");
        assert_eq!(vm.indicators[2].class(), "indicator active");
    }

    #[test]
    fn last_card_disables_forward_navigation() {
        let mut quiz = started_quiz();
        quiz.go_to(7).unwrap();
        let vm = QuizVm::from_service(&quiz).unwrap();
        assert!(vm.can_go_back);
        assert!(!vm.can_go_forward);
    }

    #[test]
    fn finished_quiz_has_no_view_model() {
        let mut quiz = started_quiz();
        quiz.finish().unwrap();
        assert_eq!(QuizVm::from_service(&quiz), None);
    }
}
