use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use bevy::prelude::*;
use softmesh::solver::{compute_forces, integrate_particles, reset_forces};
use softmesh::{GroundReference, SimParams, SoftBodyState, Spring};

const PARTICLE_COUNT: usize = 500;

// Memory tracking allocator
struct TrackingAllocator;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ret = unsafe { System.alloc(layout) };
        if !ret.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::SeqCst);
        }
        ret
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        ALLOCATED.fetch_sub(layout.size(), Ordering::SeqCst);
    }
}

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

fn get_memory_usage() -> usize {
    ALLOCATED.load(Ordering::SeqCst)
}

fn create_test_vertices() -> Vec<Vec3> {
    let side = (PARTICLE_COUNT as f32).cbrt().ceil() as usize;
    let mut vertices = Vec::new();
    'outer: for x in 0..side {
        for y in 0..side {
            for z in 0..side {
                if vertices.len() >= PARTICLE_COUNT {
                    break 'outer;
                }
                vertices.push(Vec3::new(x as f32 * 0.5, y as f32 * 0.5 + 2.0, z as f32 * 0.5));
            }
        }
    }
    vertices
}

fn memory_benchmark_system(mut commands: Commands, mut frame_count: Local<u32>) {
    *frame_count += 1;

    if *frame_count == 1 {
        // First frame: build the soft body and measure initial memory
        let before = get_memory_usage();
        let ground = GroundReference {
            position: Vec3::ZERO,
            up: Vec3::Y,
        };
        let params = SimParams::default()
            .with_gravity(Vec3::new(0.0, -9.81, 0.0))
            .with_plane_collisions();
        let state = SoftBodyState::from_mesh_vertices(
            &create_test_vertices(),
            &Transform::IDENTITY,
            Some(&ground),
            params,
        )
        .expect("bench vertices are finite");

        let after = get_memory_usage();
        let spring_count = state.spring_count();
        println!("State build allocated: {} KB", (after - before) / 1024);
        println!(
            "Springs: {} ({} KB of spring data)",
            spring_count,
            spring_count * std::mem::size_of::<Spring>() / 1024
        );
        commands.insert_resource(state);
    } else if *frame_count == 10 {
        // After 10 frames: stepping must not allocate
        let active_memory = get_memory_usage();
        println!("Memory after 10 frames: {} KB", active_memory / 1024);
        std::process::exit(0);
    }
}

fn main() {
    let initial_baseline = get_memory_usage();
    println!("Baseline memory: {} KB", initial_baseline / 1024);

    App::new()
        .add_plugins(MinimalPlugins)
        .insert_resource(SoftBodyState::default())
        .add_systems(
            Update,
            (
                memory_benchmark_system,
                reset_forces,
                compute_forces,
                integrate_particles,
            )
                .chain(),
        )
        .run();
}
