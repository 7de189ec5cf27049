use chrono::NaiveDate;

use crate::models::{Intent, InteractionType};
use crate::services::dates::{is_date_word, resolve_date};

// Longest first so "video called" is never eaten by "called".
const INTERACTION_VERBS: [&str; 6] = [
    "video called",
    "videocalled",
    "called",
    "texted",
    "emailed",
    "visited",
];

const COMPLETION_VERBS: [&str; 4] = ["completed", "finished", "done with", "did"];

const TASK_PREFIXES: [&str; 5] = ["add task", "add todo", "new task", "task", "todo"];

type Rule = fn(&str, NaiveDate) -> Option<Intent>;

// Ordered cascade, first match wins. Rule order is load-bearing: the visit
// rule is a loose prefix match that would shadow anything placed after it
// whose utterance can contain " came".
const RULES: [Rule; 5] = [
    rule_interaction,
    rule_complete_task,
    rule_visit,
    rule_payment,
    rule_create_task,
];

/// Classifies a raw utterance into an [`Intent`], or `None` when no rule
/// matches. Input is lower-cased and trimmed once; `today` anchors any
/// relative-date word the rules find.
pub fn parse(raw: &str, today: NaiveDate) -> Option<Intent> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    RULES.iter().find_map(|rule| rule(&text, today))
}

/// "called mom", "texted dad yesterday", "video called grandma tuesday".
fn rule_interaction(text: &str, today: NaiveDate) -> Option<Intent> {
    for verb in INTERACTION_VERBS {
        let Some(rest) = strip_verb(text, verb) else {
            continue;
        };
        let (name, date) = split_trailing_date(rest, today);
        if name.is_empty() {
            continue;
        }
        return Some(Intent::LogInteraction {
            name: name.to_string(),
            interaction_type: InteractionType::from_verb(verb),
            date,
        });
    }
    None
}

/// "completed laundry", "done with taxes", "did the dishes".
fn rule_complete_task(text: &str, _today: NaiveDate) -> Option<Intent> {
    for verb in COMPLETION_VERBS {
        if let Some(rest) = strip_verb(text, verb) {
            if !rest.is_empty() {
                return Some(Intent::CompleteTask {
                    task_name: rest.to_string(),
                });
            }
        }
    }
    None
}

/// "maria came", "maria came tuesday, pay her $150". Prefix match: anything
/// after the (optional) date word is only scanned for a dollar amount, which
/// rides along on the same intent as the visit's payment.
fn rule_visit(text: &str, today: NaiveDate) -> Option<Intent> {
    let (name, tail) = text.split_once(" came")?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    // Reject "maria camera": "came" must end a word.
    if tail.chars().next().is_some_and(|c| c.is_alphanumeric()) {
        return None;
    }

    let date = tail
        .split_whitespace()
        .next()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| is_date_word(w))
        .and_then(|w| resolve_date(w, today));

    let amount = tail
        .find('$')
        .and_then(|i| parse_amount(&tail[i + 1..]));

    Some(Intent::LogVisit {
        name: name.to_string(),
        date,
        amount,
    })
}

/// "pay maria $150", "paid luis $80.50".
fn rule_payment(text: &str, _today: NaiveDate) -> Option<Intent> {
    for verb in ["pay", "paid"] {
        let Some(rest) = strip_verb(text, verb) else {
            continue;
        };
        let Some(dollar) = rest.find('$') else {
            continue;
        };
        let name = rest[..dollar].trim();
        if name.is_empty() {
            continue;
        }
        if let Some(amount) = parse_amount(&rest[dollar + 1..]) {
            return Some(Intent::LogPayment {
                name: name.to_string(),
                amount,
            });
        }
    }
    None
}

/// "add task: fix leaky faucet", "todo buy milk".
fn rule_create_task(text: &str, _today: NaiveDate) -> Option<Intent> {
    for prefix in TASK_PREFIXES {
        let Some(rest) = text.strip_prefix(prefix) else {
            continue;
        };
        // Require a separator so "tasked" never matches "task".
        if !rest.starts_with([':', ' ', '\t']) {
            continue;
        }
        let title = rest
            .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
            .trim();
        if title.is_empty() {
            continue;
        }
        return Some(Intent::CreateTask {
            title: title.to_string(),
            due_date: None,
            category: None,
        });
    }
    None
}

/// Strips `verb` plus the following space, so "called" never matches
/// "calledmom".
fn strip_verb<'a>(text: &'a str, verb: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(verb)?;
    let rest = rest.strip_prefix(' ')?;
    Some(rest.trim())
}

/// Splits an optional trailing relative-date word off a name. The date word
/// is only split off when a non-empty name remains before it, so "called
/// tuesday" keeps "tuesday" as the name.
fn split_trailing_date(rest: &str, today: NaiveDate) -> (&str, Option<NaiveDate>) {
    if let Some((head, last)) = rest.rsplit_once(' ') {
        let head = head.trim();
        if !head.is_empty() && is_date_word(last) {
            return (head, resolve_date(last, today));
        }
    }
    (rest, None)
}

/// Parses the digits after a `$`: an integer with an optional two-decimal
/// fraction. No thousands separators; a one-digit fraction is left behind
/// ("$150.5" reads as 150), extra fraction digits are cut at two.
fn parse_amount(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_len == 0 {
        return None;
    }

    let mut end = int_len;
    if bytes.get(int_len) == Some(&b'.') {
        let frac: &[u8] = bytes.get(int_len + 1..).unwrap_or(&[]);
        let frac_len = frac.iter().take_while(|b| b.is_ascii_digit()).count();
        if frac_len >= 2 {
            end = int_len + 3;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        // 2025-06-11 is a Wednesday
        NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()
    }

    #[test]
    fn test_all_interaction_verbs_map() {
        let cases = [
            ("Called Mom", InteractionType::Call),
            ("Texted Mom", InteractionType::Text),
            ("Emailed Mom", InteractionType::Email),
            ("Visited Mom", InteractionType::Visit),
            ("Video called Mom", InteractionType::VideoCall),
            ("Videocalled Mom", InteractionType::VideoCall),
        ];
        for (input, expected) in cases {
            let intent = parse(input, today()).unwrap();
            assert_eq!(
                intent,
                Intent::LogInteraction {
                    name: "mom".to_string(),
                    interaction_type: expected,
                    date: None,
                },
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_interaction_with_trailing_date() {
        let intent = parse("called mom yesterday", today()).unwrap();
        assert_eq!(
            intent,
            Intent::LogInteraction {
                name: "mom".to_string(),
                interaction_type: InteractionType::Call,
                date: Some(today() - Duration::days(1)),
            }
        );
    }

    #[test]
    fn test_interaction_weekday_of_today_goes_back_a_week() {
        let intent = parse("visited grandma wednesday", today()).unwrap();
        let Intent::LogInteraction { date, .. } = intent else {
            panic!("expected interaction");
        };
        assert_eq!(date, Some(today() - Duration::days(7)));
    }

    #[test]
    fn test_date_word_alone_stays_a_name() {
        let intent = parse("called tuesday", today()).unwrap();
        assert_eq!(
            intent,
            Intent::LogInteraction {
                name: "tuesday".to_string(),
                interaction_type: InteractionType::Call,
                date: None,
            }
        );
    }

    #[test]
    fn test_complete_task() {
        assert_eq!(
            parse("completed laundry", today()).unwrap(),
            Intent::CompleteTask {
                task_name: "laundry".to_string()
            }
        );
        assert_eq!(
            parse("done with the taxes", today()).unwrap(),
            Intent::CompleteTask {
                task_name: "the taxes".to_string()
            }
        );
    }

    #[test]
    fn test_plain_visit() {
        assert_eq!(
            parse("Maria came", today()).unwrap(),
            Intent::LogVisit {
                name: "maria".to_string(),
                date: None,
                amount: None,
            }
        );
    }

    #[test]
    fn test_compound_visit_with_payment() {
        // Tuesday before Wednesday 2025-06-11 is 2025-06-10
        let intent = parse("Maria came Tuesday, pay her $150", today()).unwrap();
        assert_eq!(
            intent,
            Intent::LogVisit {
                name: "maria".to_string(),
                date: Some(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()),
                amount: Some(150.0),
            }
        );
    }

    #[test]
    fn test_visit_requires_word_boundary() {
        assert_eq!(parse("maria camera broke", today()), None);
    }

    #[test]
    fn test_payment() {
        assert_eq!(
            parse("pay Maria $150", today()).unwrap(),
            Intent::LogPayment {
                name: "maria".to_string(),
                amount: 150.0,
            }
        );
        assert_eq!(
            parse("paid luis $80.50", today()).unwrap(),
            Intent::LogPayment {
                name: "luis".to_string(),
                amount: 80.50,
            }
        );
    }

    #[test]
    fn test_payment_without_amount_is_unrecognized() {
        assert_eq!(parse("pay maria", today()), None);
    }

    #[test]
    fn test_create_task() {
        assert_eq!(
            parse("add task: fix leaky faucet", today()).unwrap(),
            Intent::CreateTask {
                title: "fix leaky faucet".to_string(),
                due_date: None,
                category: None,
            }
        );
        assert_eq!(
            parse("todo buy milk", today()).unwrap(),
            Intent::CreateTask {
                title: "buy milk".to_string(),
                due_date: None,
                category: None,
            }
        );
    }

    #[test]
    fn test_task_prefix_needs_separator() {
        assert_eq!(parse("tasked with cleanup", today()), None);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(parse("hello world", today()), None);
        assert_eq!(parse("", today()), None);
        assert_eq!(parse("   ", today()), None);
    }

    #[test]
    fn test_rule_order_visit_wins_over_payment_in_compound() {
        // The compound sentence contains "pay" but the visit rule runs
        // first, producing a single intent rather than two.
        let intent = parse("maria came tuesday, pay her $150", today()).unwrap();
        assert!(matches!(intent, Intent::LogVisit { .. }));
    }

    #[test]
    fn test_amount_fraction_rules() {
        assert_eq!(parse_amount("150"), Some(150.0));
        assert_eq!(parse_amount("80.50"), Some(80.50));
        // one-digit fraction is left behind
        assert_eq!(parse_amount("150.5"), Some(150.0));
        // extra fraction digits are cut at two
        assert_eq!(parse_amount("80.505"), Some(80.50));
        assert_eq!(parse_amount("x150"), None);
    }
}
