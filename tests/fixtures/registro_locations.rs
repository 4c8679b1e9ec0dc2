//! Registro (SP) locations for realistic test fixtures.
//!
//! Coordinates sit along the courier corridors used by the dashboard's
//! sample routes in the Vale do Ribeira.

use courier_sequencer::haversine::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Depot / courier start
// ============================================================================

pub const DEPOT: Location = Location::new("Centro de Distribuição Registro", -24.4894, -47.8419);

// ============================================================================
// Delivery addresses
// ============================================================================

pub const ROUTE_001: &[Location] = &[
    Location::new("Rua José Antônio de Campos", -24.4950, -47.8420),
    Location::new("Av. Clara Gianotti de Souza", -24.4960, -47.8430),
    Location::new("Rua Shitiro Kuroda", -24.4970, -47.8440),
    Location::new("Rua Tamekichi Takano", -24.4980, -47.8450),
    Location::new("Av. Wild José de Souza", -24.4990, -47.8460),
    Location::new("Rua Dr. Cássio Ciampolini", -24.5000, -47.8470),
    Location::new("Rua Major Vieira", -24.5010, -47.8480),
    Location::new("Rua Gaspar Ricardo", -24.5020, -47.8490),
];

pub const ROUTE_002: &[Location] = &[
    Location::new("Av. Prefeito Jonas Banks Leite", -24.5070, -47.8540),
    Location::new("Rua Pedro Bairão", -24.5080, -47.8550),
    Location::new("Rua João Batista Pocci", -24.5090, -47.8560),
    Location::new("Rua Hamilton Ferreira", -24.5100, -47.8570),
    Location::new("Rua Koki Kitajima", -24.5110, -47.8580),
];

/// The two-stop Registro scenario: A medium, B high.
pub const STOP_A: Location = Location::new("Stop A", -24.4835, -47.8502);
pub const STOP_B: Location = Location::new("Stop B", -24.4920, -47.8380);
