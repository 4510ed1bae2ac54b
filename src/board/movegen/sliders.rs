use super::super::{Board, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (1, -1),
            (-1, 1),
            (-1, -1),
        ];
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    /// Walk each ray until the board edge or a blocker. An enemy blocker is
    /// included as a capture, a friendly one is not.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        targets: &mut Vec<Square>,
    ) {
        let Some(color) = self.color_on(from) else {
            return;
        };
        for &(dr, df) in slider.directions() {
            let mut cursor = from.offset(dr, df);
            while let Some(to) = cursor {
                match self.color_on(to) {
                    None => targets.push(to),
                    Some(blocker) => {
                        if blocker != color {
                            targets.push(to);
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, df);
            }
        }
    }
}
