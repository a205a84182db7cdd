use crate::permissions::PermissionResult;

/// Events that move the map towards being ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitEvent {
    Permission(PermissionResult),
    StyleLoaded,
}

impl From<PermissionResult> for InitEvent {
    fn from(result: PermissionResult) -> Self {
        InitEvent::Permission(result)
    }
}

/// Tracks the two things that must happen before markers are drawn: the
/// location permission is granted and the map style is loaded. They can
/// happen in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    AwaitingPermission { style_loaded: bool },
    AwaitingStyle,
    Ready,
    /// Terminal: the user refused location access.
    Denied,
}

impl InitState {
    pub fn new(permission_granted: bool) -> Self {
        if permission_granted {
            InitState::AwaitingStyle
        } else {
            InitState::AwaitingPermission {
                style_loaded: false,
            }
        }
    }

    /// Applies an event. Returns `true` only on the transition into `Ready`.
    pub fn advance(&mut self, event: InitEvent) -> bool {
        let next = match (*self, event) {
            (
                InitState::AwaitingPermission { style_loaded },
                InitEvent::Permission(PermissionResult::Granted),
            ) => {
                if style_loaded {
                    InitState::Ready
                } else {
                    InitState::AwaitingStyle
                }
            }
            (
                InitState::AwaitingPermission { .. },
                InitEvent::Permission(PermissionResult::Denied),
            ) => InitState::Denied,
            (InitState::AwaitingPermission { .. }, InitEvent::StyleLoaded) => {
                InitState::AwaitingPermission { style_loaded: true }
            }
            (InitState::AwaitingStyle, InitEvent::StyleLoaded) => InitState::Ready,
            (state, _) => state,
        };

        let became_ready = next == InitState::Ready && *self != InitState::Ready;
        *self = next;
        became_ready
    }

    pub fn is_ready(&self) -> bool {
        *self == InitState::Ready
    }

    pub fn is_denied(&self) -> bool {
        *self == InitState::Denied
    }
}
