/// Status recorded when no HTTP response was received at all.
pub const TRANSPORT_FAILURE_STATUS: i32 = -1;

/// Terminal result of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    status_code: i32,
    body: String,
}

impl RequestOutcome {
    #[must_use]
    pub fn response(status: u16, body: String) -> Self {
        Self {
            status_code: i32::from(status),
            body,
        }
    }

    #[must_use]
    pub const fn transport_failure(description: String) -> Self {
        Self {
            status_code: TRANSPORT_FAILURE_STATUS,
            body: description,
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> i32 {
        self.status_code
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub const fn is_transport_failure(&self) -> bool {
        self.status_code == TRANSPORT_FAILURE_STATUS
    }
}

/// Outcomes of a finished batch, in completion order.
///
/// Only built once every unit has finished, so there is no way to add to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    outcomes: Vec<RequestOutcome>,
}

impl ResultSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequestOutcome> {
        self.outcomes.iter()
    }
}

impl From<Vec<RequestOutcome>> for ResultSet {
    fn from(outcomes: Vec<RequestOutcome>) -> Self {
        Self { outcomes }
    }
}

impl<'set> IntoIterator for &'set ResultSet {
    type Item = &'set RequestOutcome;
    type IntoIter = std::slice::Iter<'set, RequestOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
