use crate::RoutingState;

/// Strategy for deciding which region an alias target belongs to.
pub trait RegionClassifier: Send + Sync + 'static {
    /// Classify the alias target currently published for the domain.
    fn classify(&self, alias_target: &str) -> RoutingState;
}

/// Classifies alias targets by the substrings they contain.
///
/// A target belongs to a region when it contains every one of that region's
/// markers, ignoring case. Targets matching both regions or neither are
/// `Unknown`.
#[derive(Clone, Debug)]
pub struct AliasSubstringClassifier {
    primary_markers: Vec<String>,
    dr_markers: Vec<String>,
}

impl AliasSubstringClassifier {
    /// Creates a classifier from explicit marker sets.
    #[must_use]
    pub fn new<P, D>(primary_markers: P, dr_markers: D) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            primary_markers: lowercase(primary_markers),
            dr_markers: lowercase(dr_markers),
        }
    }

    /// Match load balancer targets (`elb` by default) by the AWS region name
    /// embedded in them.
    #[must_use]
    pub fn for_regions(load_balancer_marker: &str, primary_region: &str, dr_region: &str) -> Self {
        Self::new(
            [load_balancer_marker, primary_region],
            [load_balancer_marker, dr_region],
        )
    }

    fn matches(markers: &[String], target: &str) -> bool {
        !markers.is_empty() && markers.iter().all(|m| target.contains(m.as_str()))
    }
}

impl Default for AliasSubstringClassifier {
    fn default() -> Self {
        Self::for_regions("elb", "us-east-1", "us-west-2")
    }
}

impl RegionClassifier for AliasSubstringClassifier {
    fn classify(&self, alias_target: &str) -> RoutingState {
        let target = alias_target.to_lowercase();

        match (
            Self::matches(&self.primary_markers, &target),
            Self::matches(&self.dr_markers, &target),
        ) {
            (true, false) => RoutingState::Primary,
            (false, true) => RoutingState::Dr,
            _ => RoutingState::Unknown,
        }
    }
}

/// Classifies alias targets by comparing them to the known endpoint of each
/// region.
#[derive(Clone, Debug)]
pub struct ExactTargetClassifier {
    primary_target: String,
    dr_target: String,
}

impl ExactTargetClassifier {
    /// Creates a classifier for the given primary and DR endpoint names.
    #[must_use]
    pub fn new(primary_target: impl Into<String>, dr_target: impl Into<String>) -> Self {
        Self {
            primary_target: primary_target.into(),
            dr_target: dr_target.into(),
        }
    }
}

impl RegionClassifier for ExactTargetClassifier {
    fn classify(&self, alias_target: &str) -> RoutingState {
        if dns_names_match(alias_target, &self.primary_target) {
            RoutingState::Primary
        } else if dns_names_match(alias_target, &self.dr_target) {
            RoutingState::Dr
        } else {
            RoutingState::Unknown
        }
    }
}

/// Compare two DNS names, ignoring case and any trailing root dot.
#[must_use]
pub fn dns_names_match(a: &str, b: &str) -> bool {
    let a = a.trim_end_matches('.');
    let b = b.trim_end_matches('.');

    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

fn lowercase<I>(markers: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    markers
        .into_iter()
        .map(|m| m.into().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY_ELB: &str = "dualstack.app-primary-1234.us-east-1.elb.amazonaws.com.";
    const DR_ELB: &str = "dualstack.app-dr-5678.us-west-2.elb.amazonaws.com.";

    #[test]
    fn test_substring_classifier_defaults() {
        let classifier = AliasSubstringClassifier::default();

        assert_eq!(classifier.classify(PRIMARY_ELB), RoutingState::Primary);
        assert_eq!(classifier.classify(DR_ELB), RoutingState::Dr);
        assert_eq!(
            classifier.classify("DUALSTACK.APP.US-WEST-2.ELB.AMAZONAWS.COM"),
            RoutingState::Dr
        );
    }

    #[test]
    fn test_substring_classifier_requires_every_marker() {
        let classifier = AliasSubstringClassifier::default();

        assert_eq!(
            classifier.classify("d111111abcdef8.cloudfront.net"),
            RoutingState::Unknown
        );
        assert_eq!(
            classifier.classify("s3-website.us-east-1.amazonaws.com"),
            RoutingState::Unknown
        );
        assert_eq!(classifier.classify(""), RoutingState::Unknown);
    }

    #[test]
    fn test_substring_classifier_ambiguous_is_unknown() {
        let classifier = AliasSubstringClassifier::default();

        assert_eq!(
            classifier.classify("us-east-1-to-us-west-2.elb.amazonaws.com"),
            RoutingState::Unknown
        );
    }

    #[test]
    fn test_substring_classifier_without_markers_matches_nothing() {
        let classifier = AliasSubstringClassifier::new(Vec::<String>::new(), ["dr"]);

        assert_eq!(classifier.classify("anything"), RoutingState::Unknown);
        assert_eq!(classifier.classify("dr.example.com"), RoutingState::Dr);
    }

    #[test]
    fn test_exact_classifier() {
        let classifier = ExactTargetClassifier::new(PRIMARY_ELB, DR_ELB.trim_end_matches('.'));

        assert_eq!(
            classifier.classify(&PRIMARY_ELB.to_uppercase()),
            RoutingState::Primary
        );
        assert_eq!(classifier.classify(DR_ELB), RoutingState::Dr);
        assert_eq!(
            classifier.classify("other.us-east-1.elb.amazonaws.com"),
            RoutingState::Unknown
        );
    }

    #[test]
    fn test_dns_names_match() {
        assert!(dns_names_match("example.com.", "EXAMPLE.com"));
        assert!(!dns_names_match("example.com", "www.example.com"));
        assert!(!dns_names_match(".", ""));
    }
}
