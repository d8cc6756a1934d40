//! Download and copy-link controls on the results page.

/// Lifecycle of the one-shot download control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DownloadState {
    #[default]
    Ready,
    Downloading,
    Completed,
}

impl DownloadState {
    /// Moves to `Downloading`. Returns `false` if a download already started,
    /// in which case nothing changes.
    pub fn start(&mut self) -> bool {
        if *self != DownloadState::Ready {
            return false;
        }
        *self = DownloadState::Downloading;
        true
    }

    pub fn finish(&mut self) {
        if *self == DownloadState::Downloading {
            *self = DownloadState::Completed;
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DownloadState::Ready => "Download",
            DownloadState::Downloading => "Downloading...",
            DownloadState::Completed => "File Downloaded & Deleted",
        }
    }

    /// Both controls are locked once the download begins.
    pub fn is_locked(&self) -> bool {
        *self != DownloadState::Ready
    }

    pub fn show_notice(&self) -> bool {
        *self == DownloadState::Completed
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DownloadState::Ready => "download-button bg-[#3d98f4] hover:bg-[#2d78d4] cursor-pointer",
            _ => "download-button bg-gray-300 text-gray-500 cursor-not-allowed",
        }
    }
}

/// Transient feedback on the copy-link control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    /// Clipboard write in flight
    Copying,
    Copied,
    Failed,
}

impl CopyState {
    /// A click only copies while no feedback is showing, so each label
    /// stays up for its full duration.
    pub fn accepts_click(&self) -> bool {
        *self == CopyState::Idle
    }

    /// Label to show, given the control's resting label.
    pub fn label<'a>(&self, resting: &'a str) -> &'a str {
        match self {
            CopyState::Idle | CopyState::Copying => resting,
            CopyState::Copied => "Copied!",
            CopyState::Failed => "Copy failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CopyState::Idle | CopyState::Copying => "copy-link-button",
            CopyState::Copied => "copy-link-button bg-green-100 text-green-700",
            CopyState::Failed => "copy-link-button bg-red-100 text-red-700",
        }
    }
}
