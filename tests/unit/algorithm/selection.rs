//! Tests for seeded and scripted choice sources

#[cfg(test)]
mod tests {
    use mazecarve::algorithm::selection::{Chooser, RandomSelector, ScriptedSelector};

    #[test]
    fn test_random_selector_is_reproducible() {
        let mut first = RandomSelector::new(7);
        let mut second = RandomSelector::new(7);

        let a: Vec<usize> = (0..64).map(|_| first.choose(4)).collect();
        let b: Vec<usize> = (0..64).map(|_| second.choose(4)).collect();

        assert_eq!(a, b);
        assert_eq!(first.seed(), 7);
    }

    #[test]
    fn test_random_selector_stays_in_range_and_covers_all_options() {
        let mut selector = RandomSelector::new(1234);
        let mut seen = [false; 3];

        for _ in 0..300 {
            let choice = selector.choose(3);
            assert!(choice < 3);
            if let Some(slot) = seen.get_mut(choice) {
                *slot = true;
            }
        }
        assert_eq!(seen, [true; 3]);
        assert_eq!(selector.choose(1), 0);
    }

    #[test]
    fn test_entropy_selector_reports_its_seed() {
        let selector = RandomSelector::from_entropy();
        let mut replay = RandomSelector::new(selector.seed());
        let mut original = selector;

        for _ in 0..16 {
            assert_eq!(original.choose(10), replay.choose(10));
        }
    }

    #[test]
    fn test_scripted_selector_wraps_and_reduces_modulo_count() {
        let mut selector = ScriptedSelector::new(vec![0, 5, 2]);

        assert_eq!(selector.choose(4), 0);
        assert_eq!(selector.choose(4), 1);
        assert_eq!(selector.choose(2), 0);
        assert_eq!(selector.choose(3), 0);
        assert_eq!(selector.calls(), 4);

        let mut empty = ScriptedSelector::default();
        assert_eq!(empty.choose(3), 0);
    }

    fn pick_with<C: Chooser>(mut chooser: C, count: usize) -> usize {
        chooser.choose(count)
    }

    #[test]
    fn test_mutable_reference_forwards_choices() {
        let mut selector = ScriptedSelector::new(vec![1]);
        assert_eq!(pick_with(&mut selector, 2), 1);
        assert_eq!(selector.calls(), 1);
    }
}
