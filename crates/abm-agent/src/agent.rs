//! Per-agent snapshot records.

use abm_core::{AgentId, Vec2};

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A point agent: identity, position, velocity and a cosmetic group.
///
/// `group` is a small classification for renderers (colour, glyph).  It has
/// no physical effect on any model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub group: u8,
}

impl Agent {
    pub fn new(id: AgentId, position: Vec2, velocity: Vec2, group: u8) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            vx: velocity.x,
            vy: velocity.y,
            group,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }

    /// Magnitude of the velocity.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity().length()
    }

    /// Overwrite position and velocity together.
    #[inline]
    pub fn set_kinematics(&mut self, position: Vec2, velocity: Vec2) {
        self.x = position.x;
        self.y = position.y;
        self.vx = velocity.x;
        self.vy = velocity.y;
    }
}

/// Mean position of `agents`; [`Vec2::ZERO`] for an empty slice.
pub fn centroid(agents: &[Agent]) -> Vec2 {
    if agents.is_empty() {
        return Vec2::ZERO;
    }
    let sum = agents.iter().fold(Vec2::ZERO, |acc, a| acc + a.position());
    sum / agents.len() as f64
}

/// Mean speed of `agents`; 0 for an empty slice.
pub fn mean_speed(agents: &[Agent]) -> f64 {
    if agents.is_empty() {
        return 0.0;
    }
    agents.iter().map(Agent::speed).sum::<f64>() / agents.len() as f64
}

// ── KnowledgeAgent ────────────────────────────────────────────────────────────

/// An [`Agent`] carrying a scalar knowledge level in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeAgent {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub agent: Agent,

    pub knowledge_level: f64,

    /// Reserved for social-graph links.  Carried for callers that attach
    /// their own data; no model dynamics read or write it.
    pub connections: Vec<AgentId>,
}

impl KnowledgeAgent {
    pub fn new(agent: Agent, knowledge_level: f64) -> Self {
        Self {
            agent,
            knowledge_level,
            connections: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.agent.id
    }

    /// Holds any knowledge at all.
    #[inline]
    pub fn is_informed(&self) -> bool {
        self.knowledge_level > 0.0
    }

    /// Cannot learn anything more.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.knowledge_level >= 1.0
    }
}
