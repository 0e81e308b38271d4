use crate::code::{format_code, Code};
use crate::score::Score;

/// One played turn: the guess and the score it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub code: Code,
    pub score: Score,
}

/// Appends a played turn to the log. Entries are never revisited.
pub fn record(history: &mut Vec<HistoryEntry>, code: Code, score: Score) {
    history.push(HistoryEntry { code, score });
}

/// Renders the log one line per turn, most recent first.
///
/// Line format is `tour N - CODE - n: X, b: Y` with N counted 1-based from
/// the start of the game. An empty log renders as an empty string.
pub fn render_history(history: &[HistoryEntry]) -> String {
    let mut out = String::new();
    for (index, entry) in history.iter().enumerate().rev() {
        out.push_str(&format!(
            "tour {} - {} - n: {}, b: {}\n",
            index + 1,
            format_code(&entry.code),
            entry.score.black,
            entry.score.white
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_at_the_end() {
        let mut history = Vec::new();
        record(&mut history, vec![1, 1, 1, 1], Score { black: 1, white: 0 });
        record(&mut history, vec![2, 3, 4, 5], Score { black: 0, white: 2 });

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.last().unwrap(),
            &HistoryEntry {
                code: vec![2, 3, 4, 5],
                score: Score { black: 0, white: 2 },
            }
        );
    }

    #[test]
    fn test_render_empty_history() {
        assert_eq!(render_history(&[]), "");
    }

    #[test]
    fn test_render_single_entry() {
        let history = vec![HistoryEntry {
            code: vec![1, 1, 1, 1],
            score: Score { black: 0, white: 0 },
        }];
        assert_eq!(render_history(&history), "tour 1 - 1111 - n: 0, b: 0\n");
    }

    #[test]
    fn test_render_lists_most_recent_first() {
        let history = vec![
            HistoryEntry {
                code: vec![1, 1, 1, 1],
                score: Score { black: 0, white: 0 },
            },
            HistoryEntry {
                code: vec![2, 3, 4, 5],
                score: Score { black: 0, white: 2 },
            },
            HistoryEntry {
                code: vec![3, 2, 3, 2],
                score: Score { black: 1, white: 1 },
            },
        ];
        assert_eq!(
            render_history(&history),
            "tour 3 - 3232 - n: 1, b: 1\n\
             tour 2 - 2345 - n: 0, b: 2\n\
             tour 1 - 1111 - n: 0, b: 0\n"
        );
    }
}
