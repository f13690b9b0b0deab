use board::Board;
use log::{debug, trace};
use rule::Rule;

pub mod board;
pub mod pos;
pub mod preset;
pub mod rule;

/// Double-buffered Game of Life driver.
///
/// Board `generation % 2` is current, the other one is overwritten by the
/// next [`Simulator::update`]. A board borrowed through
/// [`Simulator::current_board`] cannot outlive that update, since the same
/// buffer becomes the write target two generations later.
///
/// Not synchronized: share across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct Simulator<'r> {
    boards: [Board; 2],
    generation: u64,
    rule: &'r Rule,
}

impl<'r> Simulator<'r> {
    pub fn new(initial: Board, rule: &'r Rule) -> Self {
        debug!(
            "New simulation under {rule} with {} live cells",
            initial.population()
        );

        Self {
            boards: [initial, Board::new()],
            generation: 0,
            rule,
        }
    }

    pub fn current_board(&self) -> &Board {
        &self.boards[(self.generation % 2) as usize]
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule(&self) -> &'r Rule {
        self.rule
    }

    /// Advances exactly one generation. Every cell of the next board is
    /// written from the settled current board before the generation counter
    /// moves.
    pub fn update(&mut self) {
        let rule = self.rule;
        let [even, odd] = &mut self.boards;
        let (current, next) = if self.generation % 2 == 0 {
            (&*even, odd)
        } else {
            (&*odd, even)
        };

        for pos in Board::positions() {
            let alive = current.is_alive(pos);
            let neighbors = current.neighbor_count(pos);
            next.set_cell(pos, rule.next_state(alive, neighbors));
        }

        self.generation += 1;

        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.current_board().population()
        );
    }

    /// Runs `generations` updates.
    pub fn advance(&mut self, generations: u64) {
        for _ in 0..generations {
            self.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{preset::Preset, rule::GAME_OF_LIFE};

    #[test]
    fn starts_at_generation_zero() {
        let initial = Preset::Glider.board();
        let sim = Simulator::new(initial, &GAME_OF_LIFE);

        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.current_board(), &initial);
    }

    #[test]
    fn update_increments_generation() {
        let mut sim = Simulator::new(Board::new(), &GAME_OF_LIFE);
        sim.update();
        assert_eq!(sim.generation(), 1);

        sim.advance(9);
        assert_eq!(sim.generation(), 10);
    }

    #[test]
    fn next_buffer_is_fully_overwritten() {
        // The spare buffer still holds generation 0 when generation 2 is
        // written into it, so stale cells must be cleared.
        let mut sim = Simulator::new(Preset::Full.board(), &GAME_OF_LIFE);
        sim.advance(2);

        assert_eq!(sim.current_board(), &Board::new());
    }

    #[test]
    fn simulators_share_one_rule() {
        let rule = Rule::from_counts(&[3, 6], &[2, 3]);
        let first = Simulator::new(Preset::Toad.board(), &rule);
        let second = Simulator::new(Preset::Beacon.board(), &rule);

        assert!(std::ptr::eq(first.rule(), second.rule()));
    }

    #[test]
    fn alternate_rule_is_applied() {
        // Under B1/S every isolated live cell dies and all its neighbors are born.
        let rule = Rule::from_counts(&[1], &[]);
        let mut initial = Board::new();
        initial.set_cell([3, 3], true);

        let mut sim = Simulator::new(initial, &rule);
        sim.update();

        let board = sim.current_board();
        assert!(!board.is_alive([3, 3]));
        assert_eq!(board.population(), 8);
        assert!(board.is_alive([2, 2]));
        assert!(board.is_alive([4, 4]));
    }
}
