//! Route page and the small prompt interactions of the showcase.

/// Outcome of submitting the destination field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The destination was accepted; the input should be cleared.
    Accepted { destination: String, message: String },
    /// Nothing usable was entered; the input is kept.
    Rejected { message: &'static str },
}

impl RouteOutcome {
    pub fn message(&self) -> &str {
        match self {
            RouteOutcome::Accepted { message, .. } => message,
            RouteOutcome::Rejected { message } => message,
        }
    }

    pub fn clears_input(&self) -> bool {
        matches!(self, RouteOutcome::Accepted { .. })
    }
}

pub const EMPTY_ROUTE_MESSAGE: &str = "Please enter a destination for your journey.";

/// Validate a journey destination.
pub fn submit_route(input: &str) -> RouteOutcome {
    let destination = input.trim();
    if destination.is_empty() {
        return RouteOutcome::Rejected {
            message: EMPTY_ROUTE_MESSAGE,
        };
    }

    tracing::info!("Journey to: {}", destination);
    RouteOutcome::Accepted {
        destination: destination.to_string(),
        message: format!(
            "Journey to: {}\nYour path will illuminate the digital sky.",
            destination
        ),
    }
}

/// The two props on the door/mirror panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Threshold {
    Door,
    Mirror,
}

impl Threshold {
    pub fn message(&self) -> &'static str {
        match self {
            Threshold::Door => "The door opens to reveal new possibilities...",
            Threshold::Mirror => "In the mirror, you see reflections of your digital journey...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_destination_is_rejected() {
        for input in ["", "   ", "\t\n"] {
            let outcome = submit_route(input);
            assert_eq!(outcome.message(), EMPTY_ROUTE_MESSAGE);
            assert!(!outcome.clears_input());
        }
    }

    #[test]
    fn destination_is_trimmed() {
        let outcome = submit_route("  Lisbon ");
        assert!(outcome.clears_input());
        assert_eq!(
            outcome,
            RouteOutcome::Accepted {
                destination: "Lisbon".to_string(),
                message: "Journey to: Lisbon\nYour path will illuminate the digital sky."
                    .to_string(),
            }
        );
    }

    #[test]
    fn threshold_messages() {
        assert!(Threshold::Door.message().starts_with("The door opens"));
        assert!(Threshold::Mirror.message().contains("mirror"));
    }
}
