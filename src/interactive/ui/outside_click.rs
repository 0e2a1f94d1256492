//! Pointer handling for the widget: which screen cells belong to it and
//! what a pointer-down means relative to them.

use crate::interactive::ui::events::Message;
use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, MouseEvent, MouseEventKind};
use crossterm::execute;
use ratatui::layout::{Position, Rect};
use std::io::Write;

/// Screen area currently occupied by the widget, rebuilt on every draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetRegion {
    bar: Option<Rect>,
    panel: Option<Rect>,
    rows: Vec<(usize, Rect)>,
}

impl WidgetRegion {
    pub fn clear(&mut self) {
        self.bar = None;
        self.panel = None;
        self.rows.clear();
    }

    pub fn set_bar(&mut self, area: Rect) {
        self.bar = Some(area);
    }

    pub fn set_panel(&mut self, area: Rect) {
        self.panel = Some(area);
    }

    /// Record where result `index` was drawn
    pub fn push_row(&mut self, index: usize, area: Rect) {
        self.rows.push((index, area));
    }

    pub fn row_areas(&self) -> &[(usize, Rect)] {
        &self.rows
    }

    /// Smallest rectangle covering the bar and the panel
    pub fn bounds(&self) -> Option<Rect> {
        match (self.bar, self.panel) {
            (Some(bar), Some(panel)) => Some(bar.union(panel)),
            (bar, panel) => bar.or(panel),
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.bar.is_some_and(|r| r.contains(position))
            || self.panel.is_some_and(|r| r.contains(position))
    }

    pub fn is_on_bar(&self, column: u16, row: u16) -> bool {
        self.bar
            .is_some_and(|r| r.contains(Position::new(column, row)))
    }

    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.rows
            .iter()
            .find(|(_, r)| r.contains(position))
            .map(|(index, _)| *index)
    }
}

/// Map a pointer event onto a widget message.
///
/// Only pointer-down events count. Outside the region the panel closes
/// (when it is open); inside, a row activates and the bar takes focus.
pub fn classify_pointer(
    event: &MouseEvent,
    region: &WidgetRegion,
    panel_visible: bool,
) -> Option<Message> {
    let MouseEventKind::Down(_) = event.kind else {
        return None;
    };

    if !region.contains(event.column, event.row) {
        return panel_visible.then_some(Message::OutsideClick);
    }

    if let Some(index) = region.row_at(event.column, event.row) {
        return Some(Message::ActivateResult(index));
    }

    if region.is_on_bar(event.column, event.row) {
        return Some(Message::Focus);
    }

    None
}

/// Terminal mouse reporting held for as long as the widget is mounted.
///
/// Attaching turns mouse capture on; dropping the monitor turns it off
/// again, so a mount/unmount cycle never leaves capture behind.
pub struct OutsideClickMonitor<W: Write> {
    out: W,
}

impl<W: Write> OutsideClickMonitor<W> {
    pub fn attach(mut out: W) -> Result<Self> {
        execute!(out, EnableMouseCapture)?;
        tracing::debug!("pointer monitor attached");
        Ok(Self { out })
    }

    pub fn observe(
        &self,
        event: &MouseEvent,
        region: &WidgetRegion,
        panel_visible: bool,
    ) -> Option<Message> {
        classify_pointer(event, region, panel_visible)
    }
}

impl<W: Write> Drop for OutsideClickMonitor<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, DisableMouseCapture) {
            tracing::warn!(error = %e, "failed to release mouse capture");
        }
        tracing::debug!("pointer monitor detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn down(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn region() -> WidgetRegion {
        let mut region = WidgetRegion::default();
        region.set_bar(Rect::new(0, 3, 40, 3));
        region.set_panel(Rect::new(0, 6, 40, 6));
        region.push_row(0, Rect::new(1, 7, 38, 2));
        region.push_row(1, Rect::new(1, 9, 38, 2));
        region
    }

    #[test]
    fn test_outside_click_closes_visible_panel() {
        assert!(matches!(
            classify_pointer(&down(60, 20), &region(), true),
            Some(Message::OutsideClick)
        ));
    }

    #[test]
    fn test_outside_click_ignored_when_hidden() {
        assert!(classify_pointer(&down(60, 20), &region(), false).is_none());
    }

    #[test]
    fn test_click_on_row_is_inside() {
        assert!(matches!(
            classify_pointer(&down(5, 9), &region(), true),
            Some(Message::ActivateResult(1))
        ));
        assert!(matches!(
            classify_pointer(&down(5, 7), &region(), true),
            Some(Message::ActivateResult(0))
        ));
    }

    #[test]
    fn test_click_on_bar_focuses() {
        assert!(matches!(
            classify_pointer(&down(10, 4), &region(), false),
            Some(Message::Focus)
        ));
    }

    #[test]
    fn test_click_on_panel_border_changes_nothing() {
        assert!(classify_pointer(&down(0, 11), &region(), true).is_none());
    }

    #[test]
    fn test_non_press_events_ignored() {
        let event = mouse(MouseEventKind::Up(MouseButton::Left), 60, 20);
        assert!(classify_pointer(&event, &region(), true).is_none());

        let event = mouse(MouseEventKind::Moved, 60, 20);
        assert!(classify_pointer(&event, &region(), true).is_none());
    }

    #[test]
    fn test_empty_region_treats_everything_as_outside() {
        let region = WidgetRegion::default();
        assert!(region.bounds().is_none());
        assert!(matches!(
            classify_pointer(&down(0, 0), &region, true),
            Some(Message::OutsideClick)
        ));
    }

    #[test]
    fn test_bounds_cover_bar_and_panel() {
        assert_eq!(region().bounds(), Some(Rect::new(0, 3, 40, 9)));
    }

    #[test]
    fn test_monitor_releases_capture_on_drop() {
        let mut out: Vec<u8> = Vec::new();
        {
            let monitor = OutsideClickMonitor::attach(&mut out).unwrap();
            assert!(monitor.observe(&down(60, 20), &region(), true).is_some());
        }

        let written = String::from_utf8_lossy(&out);
        let enabled = written.find("\x1b[?1000h").expect("capture enabled");
        let disabled = written.find("\x1b[?1000l").expect("capture released");
        assert!(enabled < disabled);
    }

    #[test]
    fn test_repeated_mounts_leave_no_capture_behind() {
        let mut out: Vec<u8> = Vec::new();
        for _ in 0..3 {
            let _monitor = OutsideClickMonitor::attach(&mut out).unwrap();
        }

        let written = String::from_utf8_lossy(&out);
        assert_eq!(written.matches("\x1b[?1000h").count(), 3);
        assert_eq!(written.matches("\x1b[?1000l").count(), 3);
    }
}
