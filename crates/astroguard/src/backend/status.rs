/// Result of the liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Online,
    Offline,
}

impl ConnectionStatus {
    /// Any completed HTTP exchange counts as online, whatever the status code.
    pub fn from_probe<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ConnectionStatus::Online,
            Err(_) => ConnectionStatus::Offline,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Online => "Online (Low Latency)",
            ConnectionStatus::Offline => "Offline / Local Mode",
        }
    }

    /// CSS text color for the status label.
    pub fn color(self) -> &'static str {
        match self {
            ConnectionStatus::Online => "#4ade80",
            ConnectionStatus::Offline => "#fcd34d",
        }
    }
}
