//! Axis-aligned bounding boxes.
//!
//! A solid body's `solidlo`/`solidhi` corners travel together as an
//! [`Aabb`] so the grid never sees half of a box.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use mpm_types::{MpmError, MpmResult};

/// Axis-aligned box given by its low and high corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Low corner (`xlo`, `ylo`, `zlo`).
    pub lo: DVec3,
    /// High corner (`xhi`, `yhi`, `zhi`).
    pub hi: DVec3,
}

impl Aabb {
    /// Creates a box from its corners without validation.
    pub fn new(lo: DVec3, hi: DVec3) -> Self {
        Self { lo, hi }
    }

    /// Creates a box and checks it with [`Aabb::validate`].
    pub fn try_new(lo: DVec3, hi: DVec3) -> MpmResult<Self> {
        let aabb = Self::new(lo, hi);
        aabb.validate()?;
        Ok(aabb)
    }

    /// Checks that both corners are finite and `lo <= hi` on every axis.
    ///
    /// Zero extent along an axis is allowed (a single layer of particles).
    pub fn validate(&self) -> MpmResult<()> {
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(MpmError::InvalidBounds(format!(
                "non-finite corner: lo = {}, hi = {}",
                self.lo, self.hi
            )));
        }
        for (axis, name) in ["x", "y", "z"].iter().enumerate() {
            if self.lo[axis] > self.hi[axis] {
                return Err(MpmError::InvalidBounds(format!(
                    "{name}lo ({}) > {name}hi ({})",
                    self.lo[axis], self.hi[axis]
                )));
            }
        }
        Ok(())
    }

    /// Returns true if [`Aabb::validate`] would succeed.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Edge lengths along each axis.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.hi - self.lo
    }

    /// Box center.
    #[inline]
    pub fn center(&self) -> DVec3 {
        0.5 * (self.lo + self.hi)
    }

    /// Box volume. Zero for a flat box.
    pub fn volume(&self) -> f64 {
        let e = self.extent();
        e.x * e.y * e.z
    }

    /// Returns true if `p` lies inside the box or on its boundary.
    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.lo).all() && p.cmple(self.hi).all()
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(DVec3::ZERO, DVec3::ZERO)
    }
}
