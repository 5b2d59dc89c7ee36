use std::fmt;

use crate::actors::ActorId;

/// Enemy families the spawner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Ork,
    Goblin,
    Elf,
}

impl EnemyKind {
    /// Every kind, in declaration order.
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Ork, EnemyKind::Goblin, EnemyKind::Elf];

    pub fn label(&self) -> &'static str {
        match self {
            EnemyKind::Ork => "Ork",
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Elf => "Elf",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A spawned enemy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub id: ActorId,
    pub kind: EnemyKind,
    pub health: i64,
    pub damage: i64,
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id: {} health: {} damage: {})",
            self.kind, self.id, self.health, self.damage
        )
    }
}
