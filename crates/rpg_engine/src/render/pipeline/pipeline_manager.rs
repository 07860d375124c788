//! Pipeline manager for material pipelines
//!
//! Resolves `(material, bucket, pass)` to a graphics pipeline, building it
//! on first use and keeping it for the lifetime of the manager. Shader
//! templates are loaded once when the manager is created.

use crate::core::config::ShaderConfig;
use crate::render::{AlphaMode, BucketType, Material, PassType, RenderResult};

use super::device::{load_shader, GraphicsDevice, ShaderRepository, ShaderStages};
use super::pipeline_config::{BlendFactor, CullMode, DepthTest, RenderState, Topology};
use super::shader_set::{ShaderSet, TemplateKind, TemplateLibrary};

/// Handle to a pipeline owned by a [`PipelineManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipelineId(usize);

/// Cache key plus the pipeline built for it
#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    alpha: AlphaMode,
    bucket: BucketType,
    pass: PassType,
    pipeline: PipelineId,
}

/// Template families a material can be drawn with, per pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassTemplates {
    /// Forward (lit, blended) pass
    pub forward: Option<TemplateKind>,
    /// G-buffer pass
    pub deferred: Option<TemplateKind>,
    /// Shadow map pass
    pub shadow: Option<TemplateKind>,
}

impl PassTemplates {
    /// Template for a pass, `None` when the material has no variant for it
    pub fn for_pass(&self, pass: PassType) -> Option<TemplateKind> {
        match pass {
            PassType::Forward => self.forward,
            PassType::Deferred => self.deferred,
            PassType::Shadow => self.shadow,
        }
    }
}

/// Template families per alpha mode
pub fn pass_templates(alpha: AlphaMode) -> PassTemplates {
    match alpha {
        AlphaMode::Solid => PassTemplates {
            forward: Some(TemplateKind::SolidForward),
            deferred: Some(TemplateKind::Solid),
            shadow: Some(TemplateKind::Shadow),
        },
        AlphaMode::AlphaTest => PassTemplates {
            forward: Some(TemplateKind::AlphaTestForward),
            deferred: Some(TemplateKind::AlphaTest),
            shadow: Some(TemplateKind::ShadowAlphaTest),
        },
        AlphaMode::Water => PassTemplates {
            forward: Some(TemplateKind::Water),
            ..Default::default()
        },
        AlphaMode::Ghost => PassTemplates {
            forward: Some(TemplateKind::Ghost),
            ..Default::default()
        },
        AlphaMode::Transparent | AlphaMode::Multiply | AlphaMode::Multiply2 => PassTemplates {
            forward: Some(TemplateKind::SolidForward),
            ..Default::default()
        },
        AlphaMode::AdditiveLight => PassTemplates {
            forward: Some(TemplateKind::Emission),
            ..Default::default()
        },
    }
}

/// Fixed-function state for a material pipeline
///
/// Shadow passes use a `Greater` depth test. With `overdraw_debug`, opaque
/// materials outside the shadow pass and the landscape-shadow bucket are
/// drawn additively without depth testing.
pub fn material_state(alpha: AlphaMode, bucket: BucketType, pass: PassType, overdraw_debug: bool) -> RenderState {
    let mut state = RenderState::default()
        .with_cull_mode(CullMode::Front)
        .with_depth_test(DepthTest::LessEqual);

    if pass == PassType::Shadow {
        state = state.with_depth_test(DepthTest::Greater);
    }

    state = match alpha {
        AlphaMode::Solid | AlphaMode::AlphaTest | AlphaMode::Water | AlphaMode::Ghost => state,
        AlphaMode::Transparent => state
            .with_blend(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)
            .with_depth_write(false),
        AlphaMode::AdditiveLight | AlphaMode::Multiply | AlphaMode::Multiply2 => state
            .with_blend(BlendFactor::SrcAlpha, BlendFactor::One)
            .with_depth_write(false),
    };

    let opaque = matches!(alpha, AlphaMode::Solid | AlphaMode::AlphaTest);
    if overdraw_debug && opaque && bucket != BucketType::LandscapeShadow && pass != PassType::Shadow {
        state = state
            .with_blend(BlendFactor::One, BlendFactor::One)
            .with_depth_write(false)
            .with_depth_test(DepthTest::Always);
    }

    state
}

fn build_pipeline<D: GraphicsDevice>(
    device: &mut D,
    state: &RenderState,
    set: &ShaderSet<D::Shader>,
) -> RenderResult<D::Pipeline> {
    let (topology, stages) = set.stages();
    device.create_pipeline(topology, state, stages)
}

/// Manages material pipelines and the shader templates they are built from
pub struct PipelineManager<D: GraphicsDevice, R: ShaderRepository> {
    device: D,
    repository: R,
    config: ShaderConfig,
    templates: TemplateLibrary<D::Shader>,
    entries: Vec<CacheEntry>,
    pipelines: Vec<D::Pipeline>,
}

impl<D: GraphicsDevice, R: ShaderRepository> PipelineManager<D, R> {
    /// Load every material template
    ///
    /// Mesh shading is used when enabled in `config` and supported by the device.
    pub fn new(mut device: D, mut repository: R, config: ShaderConfig) -> RenderResult<Self> {
        let mesh_workgroup = (config.mesh_shading && device.capabilities().mesh_shading)
            .then_some(config.mesh_workgroup_size);
        let templates = TemplateLibrary::load(&mut device, &mut repository, mesh_workgroup)?;
        log::info!(
            "Loaded {} material templates (mesh shading: {})",
            TemplateKind::ALL.len(),
            mesh_workgroup.is_some()
        );

        Ok(Self {
            device,
            repository,
            config,
            templates,
            entries: Vec::new(),
            pipelines: Vec::new(),
        })
    }

    /// Pipeline for drawing `material` in `bucket` during `pass`
    ///
    /// Returns `Ok(None)` when the material has no template for the pass;
    /// callers skip the draw. Built pipelines are never evicted.
    pub fn resolve(
        &mut self,
        material: &Material,
        bucket: BucketType,
        pass: PassType,
    ) -> RenderResult<Option<PipelineId>> {
        let alpha = material.effective_alpha();

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.alpha == alpha && e.bucket == bucket && e.pass == pass)
        {
            return Ok(Some(entry.pipeline));
        }

        let Some(template) = pass_templates(alpha)
            .for_pass(pass)
            .and_then(|kind| self.templates.get(kind))
        else {
            log::debug!("No {:?} pipeline for {:?} materials", pass, alpha);
            return Ok(None);
        };

        let state = material_state(alpha, bucket, pass, self.config.overdraw_debug);
        let pipeline = build_pipeline(&mut self.device, &state, template.for_bucket(bucket))?;

        let id = PipelineId(self.pipelines.len());
        self.pipelines.push(pipeline);
        self.entries.push(CacheEntry {
            alpha,
            bucket,
            pass,
            pipeline: id,
        });
        log::debug!("Built {:?}/{:?}/{:?} pipeline", alpha, bucket, pass);

        Ok(Some(id))
    }

    /// Pipeline behind a handle
    pub fn pipeline(&self, id: PipelineId) -> Option<&D::Pipeline> {
        self.pipelines.get(id.0)
    }

    /// Number of cached material pipelines
    pub fn cached_count(&self) -> usize {
        self.entries.len()
    }

    /// Fullscreen pass from `<vs>.vert.sprv` and `<fs>.frag.sprv`
    pub fn post_effect(&mut self, vs: &str, fs: &str) -> RenderResult<D::Pipeline> {
        let state = RenderState::default()
            .with_cull_mode(CullMode::Front)
            .with_depth_test(DepthTest::LessEqual)
            .with_depth_write(false);
        self.fixed_pipeline(vs, fs, &state)
    }

    /// Fog pass blended over the scene
    pub fn fog_effect(&mut self, name: &str) -> RenderResult<D::Pipeline> {
        let state = RenderState::default()
            .with_cull_mode(CullMode::Front)
            .with_blend(BlendFactor::One, BlendFactor::OneMinusSrcAlpha)
            .with_depth_test(DepthTest::Greater)
            .with_depth_write(false);
        self.fixed_pipeline(name, name, &state)
    }

    /// Compute pipeline from the blob `name`
    pub fn compute(&mut self, name: &str) -> RenderResult<D::ComputePipeline> {
        let shader = load_shader(&mut self.device, &mut self.repository, name)?;
        self.device.create_compute_pipeline(&shader)
    }

    fn fixed_pipeline(&mut self, vs: &str, fs: &str, state: &RenderState) -> RenderResult<D::Pipeline> {
        let vertex = load_shader(&mut self.device, &mut self.repository, &format!("{}.vert.sprv", vs))?;
        let fragment = load_shader(&mut self.device, &mut self.repository, &format!("{}.frag.sprv", fs))?;
        self.device.create_pipeline(
            Topology::Triangles,
            state,
            ShaderStages::Classic {
                vertex: &vertex,
                fragment: &fragment,
            },
        )
    }

    /// Graphics device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Shader configuration
    pub fn config(&self) -> &ShaderConfig {
        &self.config
    }
}
