//! Tests for the pipe connectivity table and symbol classification

#[cfg(test)]
mod tests {
    use pipeloop::spatial::position::Direction;
    use pipeloop::spatial::tiles::{Pipe, Tile};

    // Tests the fixed table of openings for every pipe symbol
    // Verified by swapping the openings of the J and 7 bends
    #[test]
    fn test_pipe_openings_table() {
        let expected = [
            ('|', [Direction::North, Direction::South]),
            ('-', [Direction::East, Direction::West]),
            ('L', [Direction::North, Direction::East]),
            ('J', [Direction::North, Direction::West]),
            ('7', [Direction::South, Direction::West]),
            ('F', [Direction::South, Direction::East]),
        ];

        for (symbol, openings) in expected {
            let pipe = Pipe::from_symbol(symbol);
            assert_eq!(pipe.map(Pipe::openings), Some(openings), "symbol {symbol}");
        }
    }

    // Tests symbol parsing and printing agree for every tile kind
    #[test]
    fn test_symbol_classification() {
        for symbol in ['|', '-', 'L', 'J', '7', 'F', '.', 'S'] {
            assert_eq!(Tile::from_symbol(symbol).symbol(), symbol);
        }
        assert_eq!(Tile::from_symbol('.'), Tile::Ground);
        assert_eq!(Tile::from_symbol('S'), Tile::Start);
        assert_eq!(Tile::from_symbol('#'), Tile::Unknown('#'));
        assert_eq!(Tile::from_symbol('x').openings(), None);
    }

    // Tests shape inference from a pair of openings in either order
    // Verified by ignoring the second direction during the lookup
    #[test]
    fn test_from_openings_recovers_each_shape() {
        for pipe in Pipe::ALL {
            let [a, b] = pipe.openings();
            assert_eq!(Pipe::from_openings(a, b), Some(pipe));
            assert_eq!(Pipe::from_openings(b, a), Some(pipe));
        }
    }

    // Tests a repeated direction never names a pipe
    // Verified by dropping the distinctness check
    #[test]
    fn test_from_openings_rejects_repeated_direction() {
        for direction in Direction::ALL {
            assert_eq!(Pipe::from_openings(direction, direction), None);
        }
    }

    #[test]
    fn test_only_pipes_have_openings() {
        assert!(Tile::Pipe(Pipe::Horizontal).openings().is_some());
        assert_eq!(Tile::Start.openings(), None);
        assert_eq!(Tile::Ground.openings(), None);
        assert!(Pipe::BendNE.opens_towards(Direction::East));
        assert!(!Pipe::BendNE.opens_towards(Direction::South));
    }
}
