//! Shader sets and material templates
//!
//! A shader set holds the stages of one geometry archetype. Blobs are named
//! `<tag>.<stage>.sprv`; the mesh stage carries the workgroup size, as in
//! `obj.64.mesh.sprv`.

use super::device::{load_shader, GraphicsDevice, ShaderRepository, ShaderStages};
use super::pipeline_config::Topology;
use crate::render::{BucketType, RenderResult};

/// Stages of one geometry archetype
#[derive(Debug)]
pub struct ShaderSet<S> {
    /// Vertex stage
    pub vertex: S,
    /// Fragment stage
    pub fragment: S,
    /// Tessellation control stage, loaded for tessellated families
    pub tess_control: Option<S>,
    /// Tessellation evaluation stage, loaded for tessellated families
    pub tess_eval: Option<S>,
    /// Mesh stage, replaces the vertex stage when present
    pub mesh: Option<S>,
}

fn blob_name(tag: &str, stage: &str) -> String {
    format!("{}.{}.sprv", tag, stage)
}

fn mesh_blob_name(tag: &str, workgroup_size: u32) -> String {
    format!("{}.{}.mesh.sprv", tag, workgroup_size)
}

impl<S> ShaderSet<S> {
    /// Load the stages for `tag`
    ///
    /// Fragment and vertex stages are always loaded. Tessellation stages are
    /// loaded when `tessellation` is set, the mesh stage when a mesh
    /// workgroup size is given. Missing blobs are errors.
    pub fn load<D>(
        device: &mut D,
        repository: &mut dyn ShaderRepository,
        tag: &str,
        tessellation: bool,
        mesh_workgroup: Option<u32>,
    ) -> RenderResult<Self>
    where
        D: GraphicsDevice<Shader = S> + ?Sized,
    {
        let fragment = load_shader(device, repository, &blob_name(tag, "frag"))?;
        let vertex = load_shader(device, repository, &blob_name(tag, "vert"))?;

        let (tess_control, tess_eval) = if tessellation {
            (
                Some(load_shader(device, repository, &blob_name(tag, "tesc"))?),
                Some(load_shader(device, repository, &blob_name(tag, "tese"))?),
            )
        } else {
            (None, None)
        };

        let mesh = match mesh_workgroup {
            Some(size) => Some(load_shader(device, repository, &mesh_blob_name(tag, size))?),
            None => None,
        };

        Ok(Self {
            vertex,
            fragment,
            tess_control,
            tess_eval,
            mesh,
        })
    }

    /// Topology and stages to build a pipeline from
    ///
    /// Mesh shading wins over tessellation, which wins over the classic path.
    pub fn stages(&self) -> (Topology, ShaderStages<'_, S>) {
        if let Some(mesh) = &self.mesh {
            return (
                Topology::Triangles,
                ShaderStages::Mesh {
                    mesh,
                    fragment: &self.fragment,
                },
            );
        }
        if let (Some(control), Some(evaluation)) = (&self.tess_control, &self.tess_eval) {
            return (
                Topology::Patches,
                ShaderStages::Tessellated {
                    vertex: &self.vertex,
                    control,
                    evaluation,
                    fragment: &self.fragment,
                },
            );
        }
        (
            Topology::Triangles,
            ShaderStages::Classic {
                vertex: &self.vertex,
                fragment: &self.fragment,
            },
        )
    }
}

/// Shader sets of one material family for every geometry archetype
#[derive(Debug)]
pub struct MaterialTemplate<S> {
    /// Landscape and landscape shadow buckets
    pub landscape: ShaderSet<S>,
    /// Static and movable objects
    pub object: ShaderSet<S>,
    /// Skinned meshes
    pub animated: ShaderSet<S>,
    /// Morph meshes
    pub morph: ShaderSet<S>,
    /// Particle effects
    pub particle: ShaderSet<S>,
}

fn set_name(base: &str, tag: &str) -> String {
    if tag.is_empty() {
        base.to_string()
    } else {
        format!("{}_{}", base, tag)
    }
}

impl<S> MaterialTemplate<S> {
    /// Load all archetype sets of the family `tag`; particles never use mesh shading
    pub fn load<D>(
        device: &mut D,
        repository: &mut dyn ShaderRepository,
        tag: &str,
        tessellation: bool,
        mesh_workgroup: Option<u32>,
    ) -> RenderResult<Self>
    where
        D: GraphicsDevice<Shader = S> + ?Sized,
    {
        Ok(Self {
            landscape: ShaderSet::load(device, repository, &set_name("lnd", tag), tessellation, mesh_workgroup)?,
            object: ShaderSet::load(device, repository, &set_name("obj", tag), tessellation, mesh_workgroup)?,
            animated: ShaderSet::load(device, repository, &set_name("ani", tag), tessellation, mesh_workgroup)?,
            morph: ShaderSet::load(device, repository, &set_name("mph", tag), tessellation, mesh_workgroup)?,
            particle: ShaderSet::load(device, repository, &set_name("pfx", tag), tessellation, None)?,
        })
    }

    /// Shader set used for a geometry bucket
    pub fn for_bucket(&self, bucket: BucketType) -> &ShaderSet<S> {
        match bucket {
            BucketType::Landscape | BucketType::LandscapeShadow => &self.landscape,
            BucketType::Static | BucketType::Movable => &self.object,
            BucketType::Morph => &self.morph,
            BucketType::Animated => &self.animated,
            BucketType::Pfx => &self.particle,
        }
    }
}

/// Material template families loaded at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Deferred opaque
    Solid,
    /// Deferred alpha-tested
    AlphaTest,
    /// Ghost
    Ghost,
    /// Emissive/additive
    Emission,
    /// Water
    Water,
    /// Forward opaque
    SolidForward,
    /// Forward alpha-tested
    AlphaTestForward,
    /// Shadow map
    Shadow,
    /// Alpha-tested shadow map
    ShadowAlphaTest,
}

impl TemplateKind {
    /// Every family, in load order
    pub const ALL: [TemplateKind; 9] = [
        TemplateKind::Solid,
        TemplateKind::AlphaTest,
        TemplateKind::Ghost,
        TemplateKind::Emission,
        TemplateKind::Water,
        TemplateKind::SolidForward,
        TemplateKind::AlphaTestForward,
        TemplateKind::Shadow,
        TemplateKind::ShadowAlphaTest,
    ];

    /// Blob name tag of the family
    pub fn tag(self) -> &'static str {
        match self {
            TemplateKind::Solid => "gbuffer",
            TemplateKind::AlphaTest => "gbuffer_at",
            TemplateKind::Ghost => "ghost",
            TemplateKind::Emission => "emi",
            TemplateKind::Water => "water",
            TemplateKind::SolidForward => "",
            TemplateKind::AlphaTestForward => "at",
            TemplateKind::Shadow => "shadow",
            TemplateKind::ShadowAlphaTest => "shadow_at",
        }
    }
}

/// All material templates, indexed by [`TemplateKind`]
#[derive(Debug)]
pub struct TemplateLibrary<S> {
    templates: Vec<(TemplateKind, MaterialTemplate<S>)>,
}

impl<S> TemplateLibrary<S> {
    /// Load every family
    ///
    /// Water is tessellated when the device supports it and never mesh
    /// shaded; all other families use mesh shading when `mesh_workgroup` is set.
    pub fn load<D>(
        device: &mut D,
        repository: &mut dyn ShaderRepository,
        mesh_workgroup: Option<u32>,
    ) -> RenderResult<Self>
    where
        D: GraphicsDevice<Shader = S> + ?Sized,
    {
        let tessellation = device.capabilities().tessellation;
        let mut templates = Vec::with_capacity(TemplateKind::ALL.len());
        for kind in TemplateKind::ALL {
            let template = if kind == TemplateKind::Water {
                MaterialTemplate::load(device, repository, kind.tag(), tessellation, None)?
            } else {
                MaterialTemplate::load(device, repository, kind.tag(), false, mesh_workgroup)?
            };
            templates.push((kind, template));
        }
        Ok(Self { templates })
    }

    /// Template of a family
    pub fn get(&self, kind: TemplateKind) -> Option<&MaterialTemplate<S>> {
        self.templates
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, template)| template)
    }
}
