// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Operator-facing view commands (toolbar buttons and keyboard shortcuts).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    /// Zoom in one step around the container center.
    ZoomIn,
    /// Zoom out one step around the container center.
    ZoomOut,
    /// Back to scale 1, no translation.
    Reset,
    /// Frame the whole diagram.
    FitToContent,
    /// Forget the saved view and frame the whole diagram.
    ClearSavedPosition,
}

impl ViewCommand {
    /// Maps a keyboard shortcut to a command.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        match key {
            '+' | '=' => Some(Self::ZoomIn),
            '-' | '_' => Some(Self::ZoomOut),
            '0' => Some(Self::Reset),
            'f' | 'F' => Some(Self::FitToContent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewCommand;

    #[test]
    fn shortcuts() {
        assert_eq!(ViewCommand::from_shortcut('='), Some(ViewCommand::ZoomIn));
        assert_eq!(ViewCommand::from_shortcut('-'), Some(ViewCommand::ZoomOut));
        assert_eq!(ViewCommand::from_shortcut('0'), Some(ViewCommand::Reset));
        assert_eq!(ViewCommand::from_shortcut('F'), Some(ViewCommand::FitToContent));
        assert_eq!(ViewCommand::from_shortcut('x'), None);
    }
}
