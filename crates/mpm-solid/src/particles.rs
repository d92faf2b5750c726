//! Per-particle state: SoA buffers for every field a solid carries.
//!
//! Particle `i` lives at index `i` of every field. All fields are created
//! together by [`ParticleArrays::allocate`] and share one length, so a
//! partially grown body cannot be represented. Fields are only reachable
//! as slices, so their values can change but their lengths cannot.

use mpm_math::{Mat3, Vec3};
use mpm_memory::{Field, Memory};
use mpm_types::constants::MASK_INITIAL;
use mpm_types::{MpmResult, ParticleId, Scalar};

/// Labels of every per-particle field, in allocation order.
pub const FIELD_NAMES: [&str; 20] = [
    "x0",
    "x",
    "v",
    "v_update",
    "a",
    "b",
    "f",
    "sigma",
    "PK1",
    "L",
    "F",
    "R",
    "U",
    "Fdot",
    "strain_increment",
    "J",
    "vol0",
    "vol",
    "mass",
    "mask",
];

/// Index-aligned per-particle fields of one solid body.
///
/// # Layout
///
/// ```text
/// x:    [x_0, x_1, x_2, ...]
/// F:    [F_0, F_1, F_2, ...]
/// mass: [m_0, m_1, m_2, ...]
/// ```
#[derive(Debug)]
pub struct ParticleArrays {
    // ─── Kinematics ───
    /// Reference position.
    x0: Field<Vec3>,
    /// Current position.
    x: Field<Vec3>,
    /// Velocity.
    v: Field<Vec3>,
    /// Provisional velocity computed before it is committed to `v`.
    v_update: Field<Vec3>,
    /// Acceleration.
    a: Field<Vec3>,

    // ─── Forces ───
    /// Body force.
    b: Field<Vec3>,
    /// External force.
    f: Field<Vec3>,

    // ─── Tensors ───
    /// Cauchy stress.
    sigma: Field<Mat3>,
    /// First Piola–Kirchhoff stress.
    pk1: Field<Mat3>,
    /// Velocity gradient `L`.
    vel_grad: Field<Mat3>,
    /// Deformation gradient `F`.
    def_grad: Field<Mat3>,
    /// Rotation `R` of the polar decomposition `F = R U`.
    rotation: Field<Mat3>,
    /// Stretch `U` of the polar decomposition `F = R U`.
    stretch: Field<Mat3>,
    /// Rate of change of the deformation gradient.
    def_grad_rate: Field<Mat3>,
    /// Incremental strain over the last step.
    strain_increment: Field<Mat3>,

    // ─── Scalars ───
    /// Jacobian `J = det F`.
    jacobian: Field<Scalar>,
    /// Reference volume.
    vol0: Field<Scalar>,
    /// Current volume.
    vol: Field<Scalar>,
    /// Particle mass.
    mass: Field<Scalar>,
    /// Opaque per-particle flag, set to 1 on allocation.
    mask: Field<i32>,
}

/// Generates a shared and a mutable slice accessor for each field.
macro_rules! field_accessors {
    ($($field:ident, $field_mut:ident: $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $field(&self) -> &[$ty] {
                &self.$field
            }

            #[inline]
            pub fn $field_mut(&mut self) -> &mut [$ty] {
                &mut self.$field
            }
        )*
    };
}

impl ParticleArrays {
    /// Allocates every field with length `np`, labelled `<prefix>:<field>`.
    ///
    /// Vectors and stresses start at zero. `F`, `R` and `U` start at the
    /// identity and `J` at one, i.e. the undeformed state. Volumes and
    /// masses start at zero and `mask` at 1.
    ///
    /// Vector and tensor fields are created directly; scalar fields and
    /// `mask` go through [`Memory::grow`].
    ///
    /// # Errors
    ///
    /// A state error if any label is already live in `memory`. Fields
    /// allocated before the failure are released.
    pub fn allocate(memory: &Memory, prefix: &str, np: usize) -> MpmResult<Self> {
        let vector = |name: &str| create(memory, prefix, name, np, Vec3::ZERO);
        let x0 = vector("x0")?;
        let x = vector("x")?;
        let v = vector("v")?;
        let v_update = vector("v_update")?;
        let a = vector("a")?;
        let b = vector("b")?;
        let f = vector("f")?;

        let tensor = |name: &str, fill: Mat3| create(memory, prefix, name, np, fill);
        let sigma = tensor("sigma", Mat3::ZERO)?;
        let pk1 = tensor("PK1", Mat3::ZERO)?;
        let vel_grad = tensor("L", Mat3::ZERO)?;
        let def_grad = tensor("F", Mat3::IDENTITY)?;
        let rotation = tensor("R", Mat3::IDENTITY)?;
        let stretch = tensor("U", Mat3::IDENTITY)?;
        let def_grad_rate = tensor("Fdot", Mat3::ZERO)?;
        let strain_increment = tensor("strain_increment", Mat3::ZERO)?;

        let mut jacobian: Field<Scalar> = grow(memory, prefix, "J", np)?;
        jacobian.fill(1.0);
        let vol0 = grow(memory, prefix, "vol0", np)?;
        let vol = grow(memory, prefix, "vol", np)?;
        let mass = grow(memory, prefix, "mass", np)?;
        let mut mask: Field<i32> = grow(memory, prefix, "mask", np)?;
        mask.fill(MASK_INITIAL);

        Ok(Self {
            x0,
            x,
            v,
            v_update,
            a,
            b,
            f,
            sigma,
            pk1,
            vel_grad,
            def_grad,
            rotation,
            stretch,
            def_grad_rate,
            strain_increment,
            jacobian,
            vol0,
            vol,
            mass,
            mask,
        })
    }

    field_accessors! {
        x0, x0_mut: Vec3;
        x, x_mut: Vec3;
        v, v_mut: Vec3;
        v_update, v_update_mut: Vec3;
        a, a_mut: Vec3;
        b, b_mut: Vec3;
        f, f_mut: Vec3;
        sigma, sigma_mut: Mat3;
        pk1, pk1_mut: Mat3;
        vel_grad, vel_grad_mut: Mat3;
        def_grad, def_grad_mut: Mat3;
        rotation, rotation_mut: Mat3;
        stretch, stretch_mut: Mat3;
        def_grad_rate, def_grad_rate_mut: Mat3;
        strain_increment, strain_increment_mut: Mat3;
        jacobian, jacobian_mut: Scalar;
        vol0, vol0_mut: Scalar;
        vol, vol_mut: Scalar;
        mass, mass_mut: Scalar;
        mask, mask_mut: i32;
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the body has no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Identifiers of every particle, in index order.
    pub fn ids(&self) -> impl Iterator<Item = ParticleId> {
        (0..self.len() as u32).map(ParticleId)
    }

    /// Mask of particle `id`, or `None` if it is out of range.
    pub fn mask_at(&self, id: ParticleId) -> Option<i32> {
        self.mask.get(id.index()).copied()
    }

    /// Sets the mask of particle `id`. Returns false if it is out of range.
    pub fn set_mask(&mut self, id: ParticleId, value: i32) -> bool {
        match self.mask.get_mut(id.index()) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Current position of particle `id`, or `None` if it is out of range.
    pub fn position(&self, id: ParticleId) -> Option<Vec3> {
        self.x.get(id.index()).copied()
    }

    /// Length of every field, in [`FIELD_NAMES`] order.
    pub fn field_lengths(&self) -> [usize; 20] {
        [
            self.x0.len(),
            self.x.len(),
            self.v.len(),
            self.v_update.len(),
            self.a.len(),
            self.b.len(),
            self.f.len(),
            self.sigma.len(),
            self.pk1.len(),
            self.vel_grad.len(),
            self.def_grad.len(),
            self.rotation.len(),
            self.stretch.len(),
            self.def_grad_rate.len(),
            self.strain_increment.len(),
            self.jacobian.len(),
            self.vol0.len(),
            self.vol.len(),
            self.mass.len(),
            self.mask.len(),
        ]
    }

    /// Returns true if every field has the same length.
    pub fn is_aligned(&self) -> bool {
        let n = self.len();
        self.field_lengths().iter().all(|&len| len == n)
    }

    /// Total mass: Σ mᵢ.
    pub fn total_mass(&self) -> f64 {
        self.mass.iter().sum()
    }

    /// Total current volume: Σ volᵢ.
    pub fn total_volume(&self) -> f64 {
        self.vol.iter().sum()
    }
}

fn label(prefix: &str, name: &str) -> String {
    format!("{prefix}:{name}")
}

fn create<T: Clone>(
    memory: &Memory,
    prefix: &str,
    name: &str,
    np: usize,
    fill: T,
) -> MpmResult<Field<T>> {
    let label = label(prefix, name);
    tracing::debug!("Growing {label}");
    memory.create(np, fill, &label)
}

fn grow<T: Default>(memory: &Memory, prefix: &str, name: &str, np: usize) -> MpmResult<Field<T>> {
    let label = label(prefix, name);
    tracing::debug!("Growing {label}");
    memory.grow(None, np, &label)
}
