// Demo: a cube of mesh vertices dropped onto the ground plane.
use bevy::prelude::*;
use rand::Rng;

use softmesh::{GroundReference, SimParams, SoftBodyPlugin, SoftBodyState};

const CUBE_SIDE: usize = 3;
const CUBE_SPACING: f32 = 0.5;
const DROP_HEIGHT: f32 = 2.5;

#[derive(Component)]
struct ParticleVisual {
    index: usize,
}

/// Vertex lattice of a cube in the mesh's local frame, centered on origin.
fn cube_vertices() -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(CUBE_SIDE * CUBE_SIDE * CUBE_SIDE);
    let center = (CUBE_SIDE as f32 - 1.0) * CUBE_SPACING * 0.5;
    for x in 0..CUBE_SIDE {
        for y in 0..CUBE_SIDE {
            for z in 0..CUBE_SIDE {
                vertices.push(Vec3::new(
                    x as f32 * CUBE_SPACING - center,
                    y as f32 * CUBE_SPACING - center,
                    z as f32 * CUBE_SPACING - center,
                ));
            }
        }
    }
    vertices
}

fn init(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(4.0, 3.0, 6.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(3.0, 8.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(12.0, 12.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.4, 0.3))),
    ));

    let mesh_transform = Transform::from_xyz(0.0, DROP_HEIGHT, 0.0);
    let ground = GroundReference {
        position: Vec3::ZERO,
        up: Vec3::Y,
    };
    let params = SimParams::default()
        .with_gravity(Vec3::new(0.0, -9.81, 0.0))
        .with_plane_collisions();

    let mut state =
        SoftBodyState::from_mesh_vertices(&cube_vertices(), &mesh_transform, Some(&ground), params)
            .expect("demo vertices are finite and mass is positive");

    // Break the lattice symmetry so the drop doesn't look perfectly rigid
    let mut rand = rand::rng();
    for particle in state.particles_mut() {
        particle.velocity = Vec3::new(
            rand.random_range(-0.2..=0.2),
            rand.random_range(-0.2..=0.2),
            rand.random_range(-0.2..=0.2),
        );
    }

    let sphere = meshes.add(Sphere::new(0.06));
    let material = materials.add(Color::srgb(0.9, 0.4, 0.2));
    for (index, position) in state.positions_world().enumerate() {
        commands.spawn((
            ParticleVisual { index },
            Mesh3d(sphere.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
        ));
    }

    commands.insert_resource(state);
}

fn sync_particle_visuals(
    state: Res<SoftBodyState>,
    mut visuals: Query<(&ParticleVisual, &mut Transform)>,
) {
    let particles = state.particles();
    for (visual, mut transform) in visuals.iter_mut() {
        if let Some(particle) = particles.get(visual.index) {
            transform.translation = particle.position;
        }
    }
}

fn draw_debug_lines(state: Res<SoftBodyState>, mut gizmos: Gizmos) {
    let particles = state.particles();
    for (i, j) in state.spring_endpoints() {
        gizmos.line(
            particles[i].position,
            particles[j].position,
            Color::srgba(0.8, 0.2, 0.2, 0.3),
        );
    }
    for (position, force) in state.force_vectors() {
        gizmos.line(position, position + force * 0.01, Color::srgb(0.2, 0.2, 0.9));
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(SoftBodyPlugin)
        .add_systems(Startup, init)
        .add_systems(Update, (sync_particle_visuals, draw_debug_lines))
        .run();
}
