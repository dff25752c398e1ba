use crate::{Audit, ContinuityPlan, Document, Incident, Kpi, NonConformity, Simulation};
use serde::de::DeserializeOwned;

/// A record type that the backend serves as a JSON array under a fixed path.
pub trait ResourceCollection: DeserializeOwned {
    /// The URL path relative to the API base.
    const PATH: &'static str;
}

// =========================================================
// Collection Definitions
// =========================================================

impl ResourceCollection for Document {
    const PATH: &'static str = "/documents/";
}

impl ResourceCollection for Incident {
    const PATH: &'static str = "/incidents/";
}

impl ResourceCollection for NonConformity {
    const PATH: &'static str = "/non-conformities/";
}

impl ResourceCollection for Audit {
    const PATH: &'static str = "/audits/";
}

impl ResourceCollection for Kpi {
    const PATH: &'static str = "/kpis/";
}

impl ResourceCollection for ContinuityPlan {
    const PATH: &'static str = "/business-continuity/plans/";
}

impl ResourceCollection for Simulation {
    const PATH: &'static str = "/business-continuity/simulations/";
}
