//! Recording device and repository for pipeline tests

use std::borrow::Cow;
use std::collections::HashSet;

use super::device::{DeviceCapabilities, GraphicsDevice, ShaderRepository, ShaderStages};
use super::pipeline_config::{RenderState, Topology};
use crate::render::{RenderError, RenderResult};

/// Pipeline creation request seen by [`FakeDevice`]
#[derive(Debug, Clone)]
pub struct BuiltPipeline {
    pub topology: Topology,
    pub state: RenderState,
    pub stages: Vec<String>,
}

/// Device whose shaders are their blob names and pipelines their build index
#[derive(Default)]
pub struct FakeDevice {
    pub caps: DeviceCapabilities,
    pub shaders: Vec<String>,
    pub pipelines: Vec<BuiltPipeline>,
    pub computes: Vec<String>,
}

impl GraphicsDevice for FakeDevice {
    type Shader = String;
    type Pipeline = usize;
    type ComputePipeline = String;

    fn capabilities(&self) -> DeviceCapabilities {
        self.caps
    }

    fn create_shader(&mut self, name: &str, _code: &[u8]) -> RenderResult<String> {
        self.shaders.push(name.to_string());
        Ok(name.to_string())
    }

    fn create_pipeline(
        &mut self,
        topology: Topology,
        state: &RenderState,
        stages: ShaderStages<'_, String>,
    ) -> RenderResult<usize> {
        let stages = match stages {
            ShaderStages::Classic { vertex, fragment } => vec![vertex.clone(), fragment.clone()],
            ShaderStages::Tessellated {
                vertex,
                control,
                evaluation,
                fragment,
            } => vec![vertex.clone(), control.clone(), evaluation.clone(), fragment.clone()],
            ShaderStages::Mesh { mesh, fragment } => vec![mesh.clone(), fragment.clone()],
        };
        self.pipelines.push(BuiltPipeline {
            topology,
            state: *state,
            stages,
        });
        Ok(self.pipelines.len() - 1)
    }

    fn create_compute_pipeline(&mut self, shader: &String) -> RenderResult<String> {
        self.computes.push(shader.clone());
        Ok(shader.clone())
    }
}

/// Repository serving a dummy blob for every name not marked missing
#[derive(Default)]
pub struct FakeRepository {
    pub requested: Vec<String>,
    pub missing: HashSet<String>,
}

impl ShaderRepository for FakeRepository {
    fn get(&mut self, name: &str) -> RenderResult<Cow<'_, [u8]>> {
        self.requested.push(name.to_string());
        if self.missing.contains(name) {
            return Err(RenderError::ShaderNotFound {
                name: name.to_string(),
            });
        }
        Ok(Cow::Owned(vec![0x03, 0x02, 0x23, 0x07]))
    }
}
