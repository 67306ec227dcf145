//! Candidate model resolution.

/// Model requested when neither the request nor the config names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Models tried after the requested one, best first.
pub const PREFERRED_MODELS: [&str; 6] = [
    "models/gemini-2.5-flash",
    "models/gemini-2.0-flash-exp",
    "models/gemini-2.5-pro",
    "models/gemini-1.5-flash",
    "models/gemini-1.5-pro",
    "models/gemini-pro",
];

const MODEL_PREFIX: &str = "models/";

/// Return the `models/`-prefixed resource name for a model id.
pub fn namespaced(model: &str) -> String {
    if model.starts_with(MODEL_PREFIX) {
        model.to_string()
    } else {
        format!("{}{}", MODEL_PREFIX, model)
    }
}

/// Build the ordered list of model names to try.
///
/// `available` holds the names the provider reported as usable for
/// `generateContent`. When it is empty (listing failed or returned nothing)
/// no filtering happens and the requested model is followed by the whole
/// priority list.
pub fn candidate_models(requested: &str, available: &[String]) -> Vec<String> {
    let requested = requested.trim();
    let mut candidates: Vec<String> = Vec::new();

    if available.is_empty() {
        if !requested.is_empty() {
            push_unique(&mut candidates, namespaced(requested));
            push_unique(&mut candidates, requested.to_string());
        }
        for preferred in PREFERRED_MODELS {
            push_unique(&mut candidates, preferred.to_string());
        }
        return candidates;
    }

    let is_available = |name: &str| available.iter().any(|a| a == name);

    if !requested.is_empty() {
        if is_available(requested) {
            push_unique(&mut candidates, requested.to_string());
        } else if is_available(&namespaced(requested)) {
            push_unique(&mut candidates, namespaced(requested));
        }
    }

    for preferred in PREFERRED_MODELS {
        if is_available(preferred) {
            push_unique(&mut candidates, preferred.to_string());
        }
    }

    if candidates.is_empty() {
        candidates.push(available[0].clone());
    }

    candidates
}

fn push_unique(candidates: &mut Vec<String>, name: String) {
    if !name.is_empty() && !candidates.contains(&name) {
        candidates.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_namespaced() {
        assert_eq!(namespaced("gemini-pro"), "models/gemini-pro");
        assert_eq!(namespaced("models/gemini-pro"), "models/gemini-pro");
    }

    #[test]
    fn test_requested_model_first_when_available() {
        let available = names(&[
            "models/gemini-1.5-pro",
            "models/gemini-2.5-flash",
            "models/gemini-1.5-flash",
        ]);

        let candidates = candidate_models("gemini-1.5-pro", &available);
        assert_eq!(
            candidates,
            names(&[
                "models/gemini-1.5-pro",
                "models/gemini-2.5-flash",
                "models/gemini-1.5-flash",
            ])
        );
    }

    #[test]
    fn test_exact_name_preferred_over_prefixed() {
        let available = names(&["tunedModels/my-twin", "models/gemini-pro"]);

        let candidates = candidate_models("tunedModels/my-twin", &available);
        assert_eq!(candidates, names(&["tunedModels/my-twin", "models/gemini-pro"]));
    }

    #[test]
    fn test_unavailable_request_is_dropped() {
        let available = names(&["models/gemini-2.5-pro"]);

        let candidates = candidate_models("gemini-9000", &available);
        assert_eq!(candidates, names(&["models/gemini-2.5-pro"]));
    }

    #[test]
    fn test_first_available_when_nothing_known() {
        let available = names(&["models/gemma-3-27b-it", "models/learnlm-2.0"]);

        let candidates = candidate_models("gemini-2.5-flash", &available);
        assert_eq!(candidates, names(&["models/gemma-3-27b-it"]));
    }

    #[test]
    fn test_unfiltered_when_listing_unavailable() {
        let candidates = candidate_models("gemini-1.5-flash", &[]);

        assert_eq!(candidates[0], "models/gemini-1.5-flash");
        assert_eq!(candidates[1], "gemini-1.5-flash");
        assert_eq!(candidates[2], "models/gemini-2.5-flash");
        // Requested model is not repeated when it is also in the priority list.
        assert_eq!(candidates.len(), 2 + PREFERRED_MODELS.len() - 1);
    }

    #[test]
    fn test_unfiltered_already_namespaced_request() {
        let candidates = candidate_models("models/gemini-2.5-flash", &[]);

        assert_eq!(candidates, names(&PREFERRED_MODELS));
    }
}
