use std::path::Path;

use bitflags::bitflags;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// The file extension (without the dot) that marks a source file of this stage.
    pub fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }

    /// Matches on the end of the file name, so a file named just `.vert` counts
    /// while `tri.frag.bak` does not.
    pub fn from_path(path: &Path) -> Option<ShaderStage> {
        let name = path.file_name()?.as_encoded_bytes();
        ShaderStage::ALL.into_iter().find(|stage| {
            name.strip_suffix(stage.extension().as_bytes())
                .is_some_and(|rest| rest.ends_with(b"."))
        })
    }

    pub fn flag(self) -> ShaderStages {
        match self {
            ShaderStage::Vertex => ShaderStages::VERTEX,
            ShaderStage::Fragment => ShaderStages::FRAGMENT,
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
    pub struct ShaderStages: u32 {
        const VERTEX   = 0b1;
        const FRAGMENT = 0b10;
    }
}

impl ShaderStages {
    /// Returns the stage of `path` if it is one of the stages in this set.
    pub fn match_path(self, path: &Path) -> Option<ShaderStage> {
        ShaderStage::from_path(path).filter(|stage| self.contains(stage.flag()))
    }
}

impl Default for ShaderStages {
    fn default() -> Self {
        ShaderStages::VERTEX | ShaderStages::FRAGMENT
    }
}
