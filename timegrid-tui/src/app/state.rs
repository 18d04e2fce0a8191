use ratatui::layout::{Position, Rect};
use timegrid::{Element, ModalKind};

/// What a screen cell stands for when the mouse lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A grid slot, with the calendar block drawn over it if any.
    Slot { index: usize, block: Option<usize> },
    OverviewCell { row: usize, day: usize },
    Backdrop(ModalKind),
    ModalContent(ModalKind),
    Close(ModalKind),
    Field(Element),
    Submit,
}

/// Clickable regions recorded by the last render. Later regions sit on top.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topmost_region_wins() {
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 80, 24), HitTarget::Slot { index: 3, block: None });
        map.push(Rect::new(0, 0, 80, 24), HitTarget::Backdrop(ModalKind::Notes));
        map.push(Rect::new(10, 5, 20, 5), HitTarget::ModalContent(ModalKind::Notes));

        assert_eq!(map.hit(12, 6), Some(HitTarget::ModalContent(ModalKind::Notes)));
        assert_eq!(map.hit(1, 1), Some(HitTarget::Backdrop(ModalKind::Notes)));
        assert_eq!(map.hit(90, 1), None);
    }

    #[test]
    fn empty_regions_are_not_recorded() {
        let mut map = HitMap::default();
        map.push(Rect::new(5, 5, 0, 3), HitTarget::Submit);
        assert_eq!(map.hit(5, 5), None);
    }
}
