use super::{FrameAbi, SimulationCore};

pub(super) fn frame_ptr(world: &SimulationCore) -> *const u32 {
    world.frame_buffer.as_ptr()
}

pub(super) fn frame_len_elements(world: &SimulationCore) -> usize {
    world.frame_buffer.len_elements()
}

pub(super) fn frame_len_bytes(world: &SimulationCore) -> usize {
    world.frame_buffer.len_bytes()
}

pub(super) fn frame_abi(world: &SimulationCore) -> FrameAbi {
    FrameAbi {
        frame_ptr: frame_ptr(world),
        frame_len_elements: frame_len_elements(world),
        frame_len_bytes: frame_len_bytes(world),
        width: world.frame_buffer.width(),
        height: world.frame_buffer.height(),
    }
}
