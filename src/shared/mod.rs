//! Shared components, resources, events, and states for Sproutvale.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.
//!
//! Simulation positions live in *logical* space: pixels, origin at the
//! top-left of the world, y growing downward (matching the tile grid).
//! The world domain converts logical positions to render space once per
//! frame in `PostUpdate`.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    /// World generation runs here, exactly once per session.
    #[default]
    Loading,
    Playing,
    Paused,
}

// ═══════════════════════════════════════════════════════════════════════
// DIRECTIONS & TOOLS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Unit step in logical space (y grows downward).
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// One grid step in this direction.
    pub fn grid_offset(self) -> (i32, i32) {
        match self {
            Facing::Up => (0, -1),
            Facing::Down => (0, 1),
            Facing::Left => (-1, 0),
            Facing::Right => (1, 0),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4) {
            0 => Facing::Up,
            1 => Facing::Down,
            2 => Facing::Left,
            _ => Facing::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Axe,
    Hoe,
    WateringCan,
}

// ═══════════════════════════════════════════════════════════════════════
// TILE GRID
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileKind {
    #[default]
    Grass,
    Farmland,
    Water,
    Stone,
    Path,
    Beach,
    Cliff,
}

/// The world's tile grid. Generated once during `GameState::Loading` and
/// fixed in shape afterwards. Out-of-range queries return `Grass` rather
/// than failing, so callers near the world edge never need bounds checks
/// of their own.
#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    pub width: i32,
    pub height: i32,
    /// Row-major tile data: tiles[y * width + x]
    tiles: Vec<TileKind>,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl TileGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Grass; (width * height) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    pub fn kind_at(&self, x: i32, y: i32) -> TileKind {
        self.index(x, y)
            .map(|i| self.tiles[i])
            .unwrap_or(TileKind::Grass)
    }

    /// Silently ignores out-of-range writes.
    pub fn set_kind(&mut self, x: i32, y: i32, kind: TileKind) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = kind;
        }
    }

    /// Tile kind under a logical pixel position.
    pub fn kind_at_world(&self, pos: Vec2) -> TileKind {
        let (gx, gy) = world_to_grid(pos);
        self.kind_at(gx, gy)
    }
}

/// Logical pixel position → grid cell.
pub fn world_to_grid(pos: Vec2) -> (i32, i32) {
    (
        (pos.x / TILE_SIZE).floor() as i32,
        (pos.y / TILE_SIZE).floor() as i32,
    )
}

/// Grid cell → logical pixel position of the cell's top-left corner.
pub fn grid_to_world(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE)
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug, Clone, Default)]
pub struct Player;

#[derive(Component, Debug, Clone)]
pub struct PlayerMovement {
    pub facing: Facing,
    pub is_moving: bool,
    /// True between UseToolStart and UseToolEnd; gates the swing animation.
    pub is_acting: bool,
    pub speed: f32,
    pub anim_timer: Timer,
    pub anim_frame: usize,
}

impl Default for PlayerMovement {
    fn default() -> Self {
        Self {
            facing: Facing::Down,
            is_moving: false,
            is_acting: false,
            speed: PLAYER_SPEED,
            anim_timer: Timer::from_seconds(FRAME_PERIOD, TimerMode::Repeating),
            anim_frame: 0,
        }
    }
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerState {
    /// `None` means bare hands: UseToolStart is a no-op.
    pub equipped_tool: Option<Tool>,
}

// ═══════════════════════════════════════════════════════════════════════
// PLANTS & TREES — field collection
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropSpecies {
    Wheat,
    Carrot,
    Tomato,
    /// Fallback species with generic sprites.
    Generic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantInstance {
    pub id: u32,
    /// Logical pixel position (tile-aligned top-left when planted by tool).
    pub pos: Vec2,
    pub species: CropSpecies,
    /// 0 = seed, 1 = sprout, 2 = growing, 3 = mature. Never decreases.
    pub growth_stage: u8,
    pub growth_timer: f32,
    pub watered: bool,
    pub water_level: f32,
}

impl PlantInstance {
    pub fn new(id: u32, pos: Vec2, species: CropSpecies) -> Self {
        Self {
            id,
            pos,
            species,
            growth_stage: 0,
            growth_timer: 0.0,
            watered: false,
            water_level: 0.0,
        }
    }

    pub fn water(&mut self) {
        self.watered = true;
        self.water_level = 1.0;
    }

    pub fn is_mature(&self) -> bool {
        self.growth_stage >= MAX_GROWTH_STAGE
    }

    /// Depth anchor for the painter's algorithm.
    pub fn depth(&self) -> f32 {
        self.pos.y + PLANT_SIZE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeInstance {
    pub id: u32,
    pub pos: Vec2,
    /// 0 = sapling, 1 = young, 2 = growing, 3 = mature. Randomized at
    /// world spawn so mature trees exist immediately.
    pub growth_stage: u8,
    pub growth_timer: f32,
    pub cut_progress: u8,
}

impl TreeInstance {
    pub fn new(id: u32, pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            id,
            pos,
            growth_stage: rng.gen_range(0..=MAX_GROWTH_STAGE),
            growth_timer: 0.0,
            cut_progress: 0,
        }
    }

    /// A freshly planted sapling (growth stage 0).
    pub fn sapling(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            growth_stage: 0,
            growth_timer: 0.0,
            cut_progress: 0,
        }
    }

    pub fn is_mature(&self) -> bool {
        self.growth_stage >= MAX_GROWTH_STAGE
    }

    /// Register one axe hit. Only mature trees take cut progress.
    /// Returns true when the tree should be felled (removed by the owner).
    pub fn chop(&mut self) -> bool {
        if !self.is_mature() {
            return false;
        }
        self.cut_progress += 1;
        self.cut_progress >= TREE_CUT_THRESHOLD
    }

    pub fn depth(&self) -> f32 {
        self.pos.y + TREE_HEIGHT
    }
}

/// What a field object looks like this frame; consumed by the render sync.
#[derive(Debug, Clone)]
pub enum FieldSpriteKind {
    Plant {
        species: CropSpecies,
        growth_stage: u8,
        watered: bool,
    },
    Tree {
        growth_stage: u8,
        cut_progress: u8,
    },
}

#[derive(Debug, Clone)]
pub struct FieldRenderable {
    pub id: u32,
    pub pos: Vec2,
    pub depth: f32,
    pub kind: FieldSpriteKind,
}

/// Owns every plant and tree on the field. The authoritative collection —
/// sprite entities only mirror it (see the farming render sync).
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldState {
    pub plants: Vec<PlantInstance>,
    pub trees: Vec<TreeInstance>,
    next_id: u32,
}

impl FieldState {
    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True if any plant's bounding box is within `PLANT_PROXIMITY` of
    /// `pos`, or any tree within `TREE_PROXIMITY`. Linear scan; fine at
    /// this scale (tens of entities).
    pub fn occupied_near(&self, pos: Vec2) -> bool {
        self.plants
            .iter()
            .any(|p| within_box(p.pos, pos, PLANT_PROXIMITY))
            || self
                .trees
                .iter()
                .any(|t| within_box(t.pos, pos, TREE_PROXIMITY))
    }

    /// Plant a seed. Fails (no mutation) if the spot is already taken.
    pub fn plant(&mut self, pos: Vec2, species: CropSpecies) -> bool {
        if self.occupied_near(pos) {
            return false;
        }
        let id = self.alloc_id();
        self.plants.push(PlantInstance::new(id, pos, species));
        true
    }

    /// Plant a sapling with the same double-proximity check as seeds.
    pub fn plant_tree(&mut self, pos: Vec2) -> bool {
        if self.occupied_near(pos) {
            return false;
        }
        let id = self.alloc_id();
        self.trees.push(TreeInstance::sapling(id, pos));
        true
    }

    /// Insert a pre-built tree without a proximity check (world spawn
    /// already validated placement).
    pub fn insert_spawned_tree(&mut self, pos: Vec2, rng: &mut impl Rng) {
        let id = self.alloc_id();
        self.trees.push(TreeInstance::new(id, pos, rng));
    }

    /// Water the first plant within range. False if none found.
    pub fn water(&mut self, pos: Vec2) -> bool {
        for plant in self.plants.iter_mut() {
            if within_box(plant.pos, pos, PLANT_PROXIMITY) {
                plant.water();
                return true;
            }
        }
        false
    }

    /// Swing the axe at the first tree within range. Returns true only
    /// when the hit fells the tree, in which case it is removed here —
    /// after the scan, never mid-iteration.
    pub fn chop(&mut self, pos: Vec2) -> bool {
        let Some(idx) = self
            .trees
            .iter()
            .position(|t| within_box(t.pos, pos, TREE_PROXIMITY))
        else {
            return false;
        };
        let felled = self.trees[idx].chop();
        if felled {
            self.trees.remove(idx);
        }
        felled
    }

    /// All field objects sorted ascending by depth (y + height). Stable,
    /// so equal depths keep insertion order and output stays deterministic.
    pub fn render_order(&self) -> Vec<FieldRenderable> {
        let mut out: Vec<FieldRenderable> = self
            .plants
            .iter()
            .map(|p| FieldRenderable {
                id: p.id,
                pos: p.pos,
                depth: p.depth(),
                kind: FieldSpriteKind::Plant {
                    species: p.species,
                    growth_stage: p.growth_stage,
                    watered: p.watered,
                },
            })
            .chain(self.trees.iter().map(|t| FieldRenderable {
                id: t.id,
                pos: t.pos,
                depth: t.depth(),
                kind: FieldSpriteKind::Tree {
                    growth_stage: t.growth_stage,
                    cut_progress: t.cut_progress,
                },
            }))
            .collect();
        out.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        out
    }
}

/// Axis-wise bounding-box proximity, matching the 32/64 px thresholds.
pub fn within_box(a: Vec2, b: Vec2, threshold: f32) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}

// ═══════════════════════════════════════════════════════════════════════
// ANIMALS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalSpecies {
    Chicken,
    Cow,
    Sheep,
}

#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub species: AnimalSpecies,
    pub is_baby: bool,
    /// Grows at `ANIMAL_GROWTH_RATE` per second; adulthood at 1.0.
    pub age: f32,
    pub speed: f32,
}

impl Animal {
    pub fn new(species: AnimalSpecies, is_baby: bool) -> Self {
        Self {
            species,
            is_baby,
            age: 0.0,
            speed: if is_baby {
                ANIMAL_BABY_SPEED
            } else {
                ANIMAL_ADULT_SPEED
            },
        }
    }

    /// Bounding box in logical pixels; babies are smaller.
    pub fn size(&self) -> Vec2 {
        if self.is_baby {
            Vec2::splat(ANIMAL_BABY_SIZE)
        } else {
            Vec2::splat(ANIMAL_ADULT_SIZE)
        }
    }

    /// Key for the sprite set the renderer should use. Changes exactly
    /// once over an animal's lifetime, at the baby→adult transition.
    pub fn sprite_key(&self) -> &'static str {
        match (self.species, self.is_baby) {
            (AnimalSpecies::Chicken, true) => "chicken_baby",
            (AnimalSpecies::Chicken, false) => "chicken",
            (AnimalSpecies::Cow, true) => "cow_baby",
            (AnimalSpecies::Cow, false) => "cow",
            (AnimalSpecies::Sheep, true) => "sheep_baby",
            (AnimalSpecies::Sheep, false) => "sheep",
        }
    }
}

/// The movement axis of the animal state machine: alternating Idle and
/// Moving phases with re-rolled durations.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct WanderState {
    pub facing: Facing,
    pub moving: bool,
    /// Seconds accumulated in the current phase.
    pub phase_timer: f32,
    /// Idle length, re-rolled in [1.0, 3.0] each time Idle is entered.
    pub cooldown: f32,
    /// Moving length, re-rolled in [0.5, 2.0] each time Moving is entered.
    pub move_duration: f32,
}

impl WanderState {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            facing: Facing::random(rng),
            moving: false,
            phase_timer: 0.0,
            cooldown: rng.gen_range(WANDER_COOLDOWN_RANGE.0..=WANDER_COOLDOWN_RANGE.1),
            move_duration: rng.gen_range(WANDER_MOVE_RANGE.0..=WANDER_MOVE_RANGE.1),
        }
    }
}

/// Frame counter on a fixed period, independent of the movement phase.
#[derive(Component, Debug, Clone)]
pub struct AnimalAnimation {
    pub timer: Timer,
    pub frame: usize,
}

impl Default for AnimalAnimation {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(FRAME_PERIOD, TimerMode::Repeating),
            frame: 0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// POSITION & DEPTH
// ═══════════════════════════════════════════════════════════════════════

/// Simulation-space position (pixels, y-down, origin top-left). The world
/// domain syncs this to `Transform` in PostUpdate.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LogicalPosition(pub Vec2);

/// Participates in the painter's algorithm. `size` is the footprint in
/// logical pixels; the depth anchor is the bottom edge, `pos.y + size.y`.
#[derive(Component, Debug, Clone, Copy)]
pub struct YSorted {
    pub size: Vec2,
}

/// Logical space → render space (Bevy's y-up, origin at world center).
pub fn logical_to_render(pos: Vec2) -> Vec2 {
    Vec2::new(pos.x - WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0 - pos.y)
}

/// Z layer for a y-sorted entity from its depth anchor.
pub fn depth_to_z(depth: f32) -> f32 {
    Z_ENTITY_BASE + depth * Z_Y_SORT_SCALE
}

// ═══════════════════════════════════════════════════════════════════════
// HOUSE
// ═══════════════════════════════════════════════════════════════════════

/// The static house footprint. Excluded from tree spawning; rendered
/// above tiles and below y-sorted entities.
#[derive(Resource, Debug, Clone)]
pub struct HouseLayout {
    /// Top-left corner in logical pixels.
    pub pos: Vec2,
    pub size: Vec2,
}

impl Default for HouseLayout {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                WORLD_WIDTH / 2.0 - HOUSE_SIZE / 2.0,
                WORLD_HEIGHT / 4.0 - HOUSE_SIZE / 2.0,
            ),
            size: Vec2::splat(HOUSE_SIZE),
        }
    }
}

impl HouseLayout {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

// ═══════════════════════════════════════════════════════════════════════
// RANDOM SOURCE
// ═══════════════════════════════════════════════════════════════════════

/// The one random source for worldgen, spawning, and wander AI. Injected
/// as a resource so tests can seed it and reproduce exact sequences.
#[derive(Resource, Debug)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — input layer → player, player → field
// ═══════════════════════════════════════════════════════════════════════

/// Discrete commands from the input layer. Movement commands fire when the
/// held direction changes; tool use is edge-triggered (once per press).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    StopMoving,
    /// 1 = Axe, 2 = Hoe, 3 = WateringCan, anything else unequips.
    SelectTool(u8),
    UseToolStart,
    UseToolEnd,
}

/// Fired once per UseToolStart while a tool is equipped. `tile_x/tile_y`
/// is the grid cell one tile-step ahead of the player's center; `pos` is
/// that cell's top-left corner in logical pixels.
#[derive(Event, Debug, Clone)]
pub struct ToolUseEvent {
    pub tool: Tool,
    pub tile_x: i32,
    pub tile_y: i32,
    pub pos: Vec2,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 32.0;
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;
pub const GRID_WIDTH: i32 = (WORLD_WIDTH / TILE_SIZE) as i32; // 25
pub const GRID_HEIGHT: i32 = (WORLD_HEIGHT / TILE_SIZE) as i32; // 18

pub const MAX_GROWTH_STAGE: u8 = 3;

// Rates are per second; the tuning matches a 60 FPS frame loop.
pub const CROP_GROWTH_RATE: f32 = 0.3;
pub const TREE_GROWTH_RATE: f32 = 0.12;
pub const WATER_DRAIN_RATE: f32 = 0.06;
pub const ANIMAL_GROWTH_RATE: f32 = 0.06;

pub const PLANT_SIZE: f32 = 32.0;
pub const TREE_WIDTH: f32 = 64.0;
pub const TREE_HEIGHT: f32 = 96.0;
pub const PLANT_PROXIMITY: f32 = 32.0;
pub const TREE_PROXIMITY: f32 = 64.0;
pub const TREE_CUT_THRESHOLD: u8 = 5;

pub const PLAYER_SIZE: f32 = 32.0;
pub const PLAYER_SPEED: f32 = 120.0;

pub const ANIMAL_ADULT_SIZE: f32 = 32.0;
pub const ANIMAL_BABY_SIZE: f32 = 24.0;
pub const ANIMAL_ADULT_SPEED: f32 = 60.0;
pub const ANIMAL_BABY_SPEED: f32 = 42.0;
pub const WANDER_COOLDOWN_RANGE: (f32, f32) = (1.0, 3.0);
pub const WANDER_MOVE_RANGE: (f32, f32) = (0.5, 2.0);

pub const HOUSE_SIZE: f32 = 128.0;
/// Trees never spawn closer than this to the house center.
pub const TREE_HOUSE_CLEARANCE: f32 = 150.0;

/// Shared animation cadence (~6 frames/sec).
pub const FRAME_PERIOD: f32 = 1.0 / 6.0;

// Z layering: tiles < house < y-sorted entities.
pub const Z_TILE: f32 = 0.0;
pub const Z_HOUSE: f32 = 5.0;
pub const Z_ENTITY_BASE: f32 = 10.0;
pub const Z_Y_SORT_SCALE: f32 = 0.01;
