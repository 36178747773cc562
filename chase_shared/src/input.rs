//! Per-tick input flags consumed by the simulation step.

bitflags::bitflags! {
    /// Driver controls held during a tick. Each flag is independent; opposite
    /// flags may be held together.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputState: u8 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl InputState {
    pub fn forward(self) -> bool {
        self.contains(Self::FORWARD)
    }

    pub fn backward(self) -> bool {
        self.contains(Self::BACKWARD)
    }

    pub fn left(self) -> bool {
        self.contains(Self::LEFT)
    }

    pub fn right(self) -> bool {
        self.contains(Self::RIGHT)
    }
}
