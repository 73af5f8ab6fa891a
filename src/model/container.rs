pub type ContainerId = String;

// A rectangular container into which items are packed. In strip-pack mode
// there is exactly one container and its `l` is an imaginary height that
// the search is free to shrink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub id: ContainerId,
    pub w: u32,
    pub l: u32,
}

impl Container {
    pub fn new(id: impl Into<ContainerId>, w: u32, l: u32) -> Self {
        Self { id: id.into(), w, l }
    }

    pub fn area(&self) -> u64 {
        self.w as u64 * self.l as u64
    }
}

// Either a fixed list of containers or a single open-ended strip.
#[derive(Clone, Debug)]
pub enum ContainerSet {
    Fixed(Vec<Container>),
    Strip { width: u32, height: u32 },
}

impl ContainerSet {
    // Materializes the current view of the container sequence the
    // dispatcher should iterate.
    pub fn containers(&self) -> Vec<Container> {
        match self {
            ContainerSet::Fixed(cs) => cs.clone(),
            ContainerSet::Strip { width, height } => {
                vec![Container::new("strip", *width, *height)]
            }
        }
    }

    pub fn is_strip(&self) -> bool {
        matches!(self, ContainerSet::Strip { .. })
    }
}
