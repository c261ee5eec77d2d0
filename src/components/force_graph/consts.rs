//! Numeric constants for the layout solver and pointer interaction.

/// Target separation between linked nodes, in world units.
pub const LINK_DISTANCE: f64 = 150.0;

/// Spring strength of the link force.
pub const LINK_STRENGTH: f64 = 0.5;

/// Many-body charge strength; negative values repel.
pub const CHARGE_STRENGTH: f64 = -800.0;

/// Squared minimum distance for charge softening, so near-coincident
/// nodes do not produce unbounded forces.
pub const CHARGE_DISTANCE_MIN2: f64 = 1.0;

/// Kinetic temperature of a freshly initialized simulation.
pub const ALPHA_INITIAL: f64 = 1.0;

/// Below this alpha the solver is considered settled.
pub const ALPHA_MIN: f64 = 0.001;

/// Multiplicative alpha decay per step. Kept slow so the graph settles
/// smoothly rather than quickly.
pub const ALPHA_DECAY: f64 = 0.02;

/// Fraction of velocity lost per step.
pub const VELOCITY_DECAY: f64 = 0.4;

/// Alpha target while a node is being dragged; reheats the solver so
/// neighbors follow the held node.
pub const DRAG_ALPHA_TARGET: f64 = 0.1;

/// Base render radius of a central node at fit = 1.
pub const CENTRAL_BASE_RADIUS: f64 = 50.0;

/// Base render radius of a satellite node at fit = 1.
pub const SATELLITE_BASE_RADIUS: f64 = 30.0;

/// Extra clearance added to a node's radius for collision avoidance.
pub const COLLIDE_PADDING: f64 = 15.0;

/// Fit assigned to nodes whose records carry no usable score.
pub const DEFAULT_FIT: f64 = 0.5;

/// Lower bound of the view zoom scale.
pub const ZOOM_MIN: f64 = 0.5;

/// Upper bound of the view zoom scale.
pub const ZOOM_MAX: f64 = 3.0;

/// Pointer travel (screen pixels) below which a press-release counts as a
/// click rather than a drag.
pub const CLICK_TOLERANCE: f64 = 3.0;

/// Radius of the circle initial node positions are seeded on.
pub const SEED_RADIUS: f64 = 100.0;
