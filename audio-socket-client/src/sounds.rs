//! Sound and animation name tables
//!
//! Ids collected from live sessions in discovery mode. The boss tables are
//! grouped by the attack that produces the sound so a client can tell which
//! telegraph is playing.

use std::fmt;

/// Well-known sound effect ids
pub const SOUND_NAMES: &[(i32, &str)] = &[
    (60, "CLOSE_DOOR"),
    (62, "OPEN_DOOR"),
    (200, "TELEPORT_VWOOP"),
    (227, "MAGIC_SPLASH_BOING"),
    (510, "TAKE_DAMAGE_SPLAT"),
    (511, "ZERO_DAMAGE_SPLAT"),
    (1930, "NPC_TELEPORT_WOOSH"),
    (2266, "UI_BOOP"),
    (2498, "ATTACK_HIT"),
    (2577, "COOK_WOOSH"),
    (2581, "PICK_PLANT_BLOOP"),
    (2582, "ITEM_PICKUP"),
    (2596, "FIRE_WOOSH"),
    (2597, "TINDER_STRIKE"),
    (2663, "PRAYER_DEACTIVATE_VWOOP"),
    (2664, "PRAYER_ACTIVATE_CLARITY_OF_THOUGHT"),
    (2675, "PRAYER_ACTIVATE_PROTECT_FROM_MAGIC"),
    (2676, "PRAYER_ACTIVATE_PROTECT_FROM_MELEE"),
    (2677, "PRAYER_ACTIVATE_PROTECT_FROM_MISSILES"),
    (2734, "TREE_FALLING"),
    (2735, "TREE_CHOP"),
    (2738, "BURY_BONES"),
    (2739, "ITEM_DROP"),
    (3220, "MINING_TINK"),
    (3790, "SMITH_ANVIL_TINK"),
    (3791, "SMITH_ANVIL_TONK"),
    (3813, "TOWN_CRIER_BELL_DING"),
    (3816, "TOWN_CRIER_SHOUT_SQUEAK"),
    (3817, "TOWN_CRIER_BELL_DONG"),
    (3924, "GE_COIN_TINKLE"),
    (3925, "GE_ADD_OFFER_DINGALING"),
    (3928, "GE_COLLECT_BLOOP"),
    (3929, "GE_INCREMENT_PLOP"),
    (3930, "GE_DECREMENT_PLOP"),
];

/// Sol Heredit animation ids
pub const BOSS_ANIMATIONS: &[(i32, &str)] = &[
    (10874, "SOL_HEREDIT_IDLE"),
    (10875, "SOL_HEREDIT_SITTING_IDLE"),
    (10876, "SOL_HEREDIT_ARENA_JUMP"),
    (10877, "SOL_HEREDIT_ARENA_LAND"),
    (10878, "SOL_HEREDIT_WALK"),
    (10882, "SOL_HEREDIT_SPEAR_ATTACK"),
    (10883, "SOL_HEREDIT_SPEAR_ATTACK_TELEGRAPH"),
    (10884, "SOL_HEREDIT_GRAPPLE_TELEGRAPH"),
    (10885, "SOL_HEREDIT_SHIELD_SLAM_TELEGRAPH"),
    (10886, "SOL_HEREDIT_TRIPLE_ATTACK"),
    (10887, "SOL_HEREDIT_TRIPLE_ATTACK_FAST"),
    (10888, "SOL_HEREDIT_DEATH"),
];

const SPEAR_SOUNDS: &[(i32, &str)] = &[
    (8047, "SOL_SPEAR_TELEGRAPH_STAB_08"),
    (8051, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_09"),
    (8055, "SOL_SPEAR_TELEGRAPH_DISLODGE_02"),
    (8056, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_05"),
    (8057, "SOL_SPEAR_TELEGRAPH_STAB_IMPACT_05"),
    (8058, "SOL_SPEAR_TELEGRAPH_STAB_IMPACT_02"),
    (8073, "SOL_SPEAR_TELEGRAPH_CHARGE_13"),
    (8078, "SOL_SPEAR_TELEGRAPH_CHARGE_05"),
    (8079, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_08"),
    (8086, "SOL_SPEAR_TELEGRAPH_CHARGE_03"),
    (8087, "SOL_SPEAR_TELEGRAPH_STAB_01"),
    (8088, "SOL_SPEAR_TELEGRAPH_LUNGE_03"),
    (8092, "SOL_SPEAR_TELEGRAPH_STAB_02"),
    (8096, "SOL_SPEAR_TELEGRAPH_DISLODGE_01"),
    (8097, "SOL_SPEAR_TELEGRAPH_BASS_02"),
    (8099, "SOL_SPEAR_TELEGRAPH_CHARGE_01"),
    (8102, "SOL_SPEAR_TELEGRAPH_CHARGE_06"),
    (8103, "SOL_SPEAR_TELEGRAPH_BASS_01"),
    (8109, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_03"),
    (8120, "SOL_SPEAR_TELEGRAPH_CHARGE_02"),
    (8121, "SOL_SPEAR_TELEGRAPH_STAB_IMPACT_01"),
    (8123, "SOL_SPEAR_TELEGRAPH_STAB_03"),
    (8127, "SOL_SPEAR_TELEGRAPH_LUNGE_01"),
    (8131, "SOL_SPEAR_TELEGRAPH_DISLODGE_06"),
    (8135, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_03"),
    (8137, "SOL_SPEAR_TELEGRAPH_BACK_FOOTSTEP_01"),
    (8139, "SOL_SPEAR_TELEGRAPH_BASS_STEP_01"),
    (8147, "SOL_SPEAR_TELEGRAPH_CHARGE_16"),
    (8153, "SOL_SPEAR_TELEGRAPH_CHARGE_08"),
    (8155, "SOL_SPEAR_TELEGRAPH_STAB_IMPACT_03"),
    (8160, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_02"),
    (8162, "SOL_SPEAR_TELEGRAPH_STAB_IMPACT_04"),
    (8163, "SOL_SPEAR_TELEGRAPH_CHARGE_15"),
    (8165, "SOL_SPEAR_TELEGRAPH_BACK_FOOTSTEP_02"),
    (8168, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_02"),
    (8169, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_06"),
    (8170, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_14"),
    (8195, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_01"),
    (8206, "SOL_SPEAR_TELEGRAPH_BASS_03"),
    (8207, "SOL_SPEAR_TELEGRAPH_CHARGE_04"),
    (8208, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_07"),
    (8215, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_04"),
    (8221, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_07"),
    (8222, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_06"),
    (8224, "SOL_SPEAR_TELEGRAPH_STAB_METAL_02"),
    (8232, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_01"),
    (8238, "SOL_SPEAR_TELEGRAPH_CHARGE_07"),
    (8240, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_10"),
    (8264, "SOL_SPEAR_TELEGRAPH_DISLODGE_04"),
    (8267, "SOL_SPEAR_TELEGRAPH_CHARGE_12"),
    (8272, "SOL_SPEAR_TELEGRAPH_DISLODGE_03"),
    (8285, "SOL_SPEAR_TELEGRAPH_CHARGE_10"),
    (8288, "SOL_SPEAR_TELEGRAPH_STAB_METAL_01"),
    (8291, "SOL_SPEAR_TELEGRAPH_LUNGE_04"),
    (8294, "SOL_SPEAR_TELEGRAPH_CHARGE_09"),
    (8302, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_09"),
    (8303, "SOL_SPEAR_TELEGRAPH_CHARGE_14"),
    (8308, "SOL_SPEAR_TELEGRAPH_STAB_IMPACT_06"),
    (8315, "SOL_SPEAR_TELEGRAPH_DISLODGE_05"),
    (8319, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_11"),
    (8320, "SOL_SPEAR_TELEGRAPH_STAB_04"),
    (8325, "SOL_SPEAR_TELEGRAPH_LUNGE_02"),
    (8328, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_08"),
    (8331, "SOL_SPEAR_TELEGRAPH_LUNGE_05"),
    (8333, "SOL_SPEAR_TELEGRAPH_TRIDENT_END_MOVE_04"),
    (8335, "SOL_SPEAR_TELEGRAPH_CHARGE_11"),
    (8336, "SOL_SPEAR_TELEGRAPH_FOOTSTEP_05"),
];

const SHIELD_SOUNDS: &[(i32, &str)] = &[
    (8054, "SOL_SHIELD_ARM_PREP_03"),
    (8063, "SOL_SHIELD_DROP_IMPACT_02"),
    (8145, "SOL_SHIELD_DROP_IMPACT_03"),
    (8148, "SOL_SHIELD_SLAM_CHARGE_05"),
    (8150, "SOL_SHIELD_SLAM_CHARGE_06"),
    (8154, "SOL_SHIELD_SLAM_CHARGE_01"),
    (8174, "SOL_SHIELD_DROP_IMPACT_01"),
    (8189, "SOL_SHIELD_SLAM_CHARGE_03"),
    (8233, "SOL_SHIELD_SLAM_CHARGE_04"),
    (8260, "SOL_SHIELD_SLAM_02"),
    (8282, "SOL_SHIELD_SLAM_01"),
    (8310, "SOL_SHIELD_ARM_PREP_02"),
    (8318, "SOL_SHIELD_SLAM_CHARGE_02"),
    (8322, "SOL_SHIELD_ARM_PREP_04"),
    (8326, "SOL_SHIELD_ARM_PREP_01"),
];

const GRAPPLE_SOUNDS: &[(i32, &str)] = &[
    (8052, "SOL_GRAPPLE_ARM_LUNGE_02"),
    (8065, "SOL_GRAPPLE_ARM_IMPACT_STEP_01"),
    (8066, "SOL_GRAPPLE_ARM_LUNGE_03"),
    (8075, "SOL_GRAPPLE_FIRST_SHIELD_DROP_01"),
    (8081, "SOL_GRAPPLE_ARM_RETURN_BASS_02"),
    (8084, "SOL_GRAPPLE_ARM_FOOTSTEP_04"),
    (8094, "SOL_GRAPPLE_ARM_SHIELD_FLOOR_IMPACT_03"),
    (8114, "SOL_GRAPPLE_ARM_RETURN_BASS_01"),
    (8129, "SOL_GRAPPLE_ARM_SHIELD_FLOOR_IMPACT_05"),
    (8146, "SOL_GRAPPLE_ARM_LUNGE_01"),
    (8156, "SOL_GRAPPLE_ARM_FOOTSTEP_02"),
    (8159, "SOL_GRAPPLE_ARM_FOOTSTEP_0"),
    (8186, "SOL_GRAPPLE_ARM_SHIELD_FLOOR_IMPACT_06"),
    (8194, "SOL_GRAPPLE_ARM_FOOTSTEP_03"),
    (8219, "SOL_GRAPPLE_ARM_SHIELD_FLOOR_IMPACT_01"),
    (8226, "SOL_GRAPPLE_ARM_SHIELD_FLOOR_IMPACT_02"),
    (8241, "SOL_GRAPPLE_ARM_BASS_01"),
    (8257, "SOL_GRAPPLE_ARM_FOOTSTEP_01"),
    (8266, "SOL_GRAPPLE_ARM_BASS_02"),
    (8269, "SOL_GRAPPLE_ARM_SHIELD_FLOOR_IMPACT_04"),
    (8277, "SOL_GRAPPLE_ARM_FOOTSTEP_06"),
    (8278, "SOL_GRAPPLE_ARM_RETURN_01"),
    (8290, "SOL_GRAPPLE_SHIELD_DROP_01"),
    (8298, "SOL_GRAPPLE_ARM_FOOTSTEP_07"),
    (8329, "SOL_GRAPPLE_CHARGE_01"),
];

const TRIPLE_SOUNDS: &[(i32, &str)] = &[
    (8060, "SOL_TRIPLE_FIRST_RUMBLE_02"),
    (8072, "SOL_TRIPLE_FINAL_STAB_WHOOSH_01"),
    (8074, "SOL_TRIPLE_SHORTER_IMPACT_03"),
    (8076, "SOL_TRIPLE_FIRST_RUMBLE_01"),
    (8077, "SOL_TRIPLE_FINAL_DISLODGE_01"),
    (8082, "SOL_TRIPLE_TRIDENT_STAB_02"),
    (8083, "SOL_TRIPLE_CHARGE_05"),
    (8091, "SOL_TRIPLE_SHORTER_METAL_IMPACT_01"),
    (8112, "SOL_TRIPLE_CHARGE_04"),
    (8113, "SOL_TRIPLE_MID_CHARGE_01"),
    (8116, "SOL_TRIPLE_FIRST_IMPACT_01"),
    (8124, "SOL_TRIPLE_END_WHOOSH_01"),
    (8125, "SOL_TRIPLE_END_RUMBLE_01"),
    (8134, "SOL_TRIPLE_TRIDENT_2ND_WHOOSH_02"),
    (8140, "SOL_TRIPLE_SHORTER_IMPACT_02"),
    (8141, "SOL_TRIPLE_FINAL_DISLODGE_05"),
    (8158, "SOL_TRIPLE_SHORTER_BASS_RIPPLES_01"),
    (8166, "SOL_TRIPLE_END_WHOOSH_02"),
    (8171, "SOL_TRIPLE_SHORTER_END_IMPACT_01"),
    (8173, "SOL_TRIPLE_FINAL_DISLODGE_04"),
    (8178, "SOL_TRIPLE_CHARGE_07"),
    (8181, "SOL_TRIPLE_TRIDENT_STAB_01"),
    (8182, "SOL_TRIPLE_FINAL_DISLODGE_06"),
    (8183, "SOL_TRIPLE_SHORTER_END_RUMBLE_02"),
    (8187, "SOL_TRIPLE_INTRO_01"),
    (8188, "SOL_TRIPLE_SHORTER_END_RUMBLE_01"),
    (8190, "SOL_TRIPLE_TRIDENT_STAB_03"),
    (8191, "SOL_TRIPLE_LONG_END_IMPACT_02"),
    (8196, "SOL_TRIPLE_FINAL_DISLODGE_02"),
    (8197, "SOL_TRIPLE_METAL_INTRO_03"),
    (8198, "SOL_TRIPLE_FIRST_WHOOSH_02"),
    (8210, "SOL_TRIPLE_FINAL_DISLODGE_03"),
    (8211, "SOL_TRIPLE_METAL_INTRO_01"),
    (8217, "SOL_TRIPLE_CHARGE_03"),
    (8218, "SOL_TRIPLE_MID_CHARGE_02"),
    (8229, "SOL_TRIPLE_FINAL_STAB_WHOOSH_05"),
    (8242, "SOL_TRIPLE_METALLIC_ENDING_STAB_01"),
    (8251, "SOL_TRIPLE_CHARGE_01"),
    (8261, "SOL_TRIPLE_TRIDENT_2ND_WHOOSH_01"),
    (8265, "SOL_TRIPLE_CHARGE_02"),
    (8270, "SOL_TRIPLE_LONG_END_IMPACT_01"),
    (8274, "SOL_TRIPLE_SMALL_CHARGE_01"),
    (8275, "SOL_TRIPLE_TRIDENT_2ND_WHOOSH_03"),
    (8283, "SOL_TRIPLE_FOOTSTEP_01"),
    (8287, "SOL_TRIPLE_FIRST_WHOOSH_01"),
    (8293, "SOL_TRIPLE_SHORTER_END_RUMBLE_03"),
    (8305, "SOL_TRIPLE_TRIDENT_WHOOSH_03"),
    (8307, "SOL_TRIPLE_SHORTER_IMPACT_01"),
    (8311, "SOL_TRIPLE_INTRO_02"),
    (8312, "SOL_TRIPLE_METAL_INTRO_02"),
    (8314, "SOL_TRIPLE_FINAL_STAB_01"),
    (8317, "SOL_TRIPLE_CHARGE_06"),
    (8321, "SOL_TRIPLE_TRIDENT_WHOOSH_02"),
    (8327, "SOL_TRIPLE_FOOTSTEP_02"),
    (8330, "SOL_TRIPLE_TRIDENT_WHOOSH_01"),
    (8334, "SOL_TRIPLE_FINAL_STAB_WHOOSH_04"),
];

const DEATH_SOUNDS: &[(i32, &str)] = &[
    (8048, "SOL_DEATH_METALLIC_IMPACT_10"),
    (8068, "SOL_DEATH_FIRST_SHIELD_DROP_02"),
    (8069, "SOL_DEATH_SECOND_FALL_02"),
    (8090, "SOL_DEATH_SECOND_FALL_01"),
    (8098, "SOL_DEATH_METALLIC_IMPACT_03"),
    (8105, "SOL_DEATH_FIRST_FALL_03"),
    (8115, "SOL_DEATH_RINGING_02"),
    (8119, "SOL_DEATH_METALLIC_IMPACT_09"),
    (8122, "SOL_DEATH_METALLIC_IMPACT_02"),
    (8126, "SOL_DEATH_SECOND_FALL_03"),
    (8130, "SOL_DEATH_METALLIC_IMPACT_08"),
    (8132, "SOL_DEATH_METALLIC_IMPACT_04"),
    (8133, "SOL_DEATH_WHOOSH_01"),
    (8138, "SOL_DEATH_METALLIC_IMPACT_06"),
    (8157, "SOL_DEATH_WHOOSH_03"),
    (8175, "SOL_DEATH_METALLIC_IMPACT_05"),
    (8177, "SOL_DEATH_METALLIC_IMPACT_07"),
    (8212, "SOL_DEATH_METALLIC_IMPACT_01"),
    (8214, "SOL_DEATH_FIRST_FALL_02"),
    (8243, "SOL_DEATH_SECOND_FALL_05"),
    (8244, "SOL_DEATH_SECOND_FALL_06"),
    (8255, "SOL_DEATH_FIRST_SHIELD_DROP_01"),
    (8263, "SOL_DEATH_RINGING_01"),
    (8280, "SOL_DEATH_SECOND_FALL_04"),
    (8284, "SOL_DEATH_LAND_RUMBLE_01"),
    (8300, "SOL_DEATH_FIRST_SHIELD_DROP_03"),
    (8316, "SOL_DEATH_WHOOSH_02"),
    (8323, "SOL_DEATH_FIRST_FALL_01"),
    (8324, "SOL_DEATH_FIRST_SHIELD_DROP_04"),
    (8337, "SOL_DEATH_FIRST_WHOOSH_01"),
];

const ARENA_SOUNDS: &[(i32, &str)] = &[
    (8049, "SOL_ARENA_JUMP_METAL_02"),
    (8064, "SOL_ARENA_LAND_RUMBLE_01"),
    (8067, "SOL_ARENA_JUMP_HIGH_WIND_03"),
    (8071, "SOL_ARENA_LAND_METAL_IMPACT2_02"),
    (8080, "SOL_ARENA_JUMP_HIGH_WIND_01"),
    (8089, "SOL_ARENA_GROUND_RUMBLE_01"),
    (8101, "SOL_ARENA_JUMP_TAKE_OFF_02"),
    (8106, "SOL_ARENA_LAND_METAL_IMPACT_01"),
    (8128, "SOL_ARENA_JUMP_SPEED_WIND_01"),
    (8142, "SOL_ARENA_JUMP_BASS_01"),
    (8149, "SOL_ARENA_LAND_METAL_IMPACT2_01"),
    (8161, "SOL_ARENA_JUMP_LOW_WIND_03"),
    (8167, "SOL_ARENA_LAND_METAL_IMPACT_02"),
    (8172, "SOL_ARENA_JUMP_LOW_WIND_05"),
    (8176, "SOL_ARENA_JUMP_HIGH_WIND_04"),
    (8185, "SOL_ARENA_JUMP_LOW_WIND_04"),
    (8192, "SOL_ARENA_JUMP_TAKE_OFF_01"),
    (8200, "SOL_ARENA_JUMP_LOW_WIND_01"),
    (8202, "SOL_ARENA_JUMP_HIGH_WIND_02"),
    (8203, "SOL_ARENA_LAND_METAL_IMPACT2_03"),
    (8237, "SOL_ARENA_JUMP_WHOOSH_01"),
    (8254, "SOL_ARENA_DELAYED_TAKE_OFF_01"),
    (8256, "SOL_ARENA_LAND_IMPACT_01"),
    (8258, "SOL_ARENA_GROUND_RUMBLE_02"),
    (8262, "SOL_ARENA_LAND_IMPACT_02"),
    (8276, "SOL_ARENA_JUMP_SPEED_WIND_02"),
    (8279, "SOL_ARENA_GROUND_RUMBLE_04"),
    (8281, "SOL_ARENA_GROUND_RUMBLE_03"),
    (8289, "SOL_ARENA_GROUND_RUMBLE_05"),
    (8295, "SOL_ARENA_JUMP_LOW_WIND_02"),
    (8297, "SOL_ARENA_JUMP_METAL_01"),
];

const AMBIENT_SOUNDS: &[(i32, &str)] = &[
    (8061, "SOL_TRIDENT_RELEASE_01"),
    (8085, "SOL_HISS_02"),
    (8095, "SOL_BACK_BREAK_02"),
    (8107, "SOL_FOOTSTEPS_03"),
    (8117, "SOL_SHORT_HISS_02"),
    (8118, "SOL_FOOTSTEPS_02"),
    (8143, "SOL_FOOTSTEPS_06"),
    (8180, "SOL_HISS_03"),
    (8184, "SOL_SHORT_HISS_01"),
    (8204, "SOL_FOOTSTEPS_05"),
    (8216, "SOL_FOOTSTEPS_07"),
    (8220, "SOL_HISS_03B"),
    (8225, "SOL_BACK_BREAK_01"),
    (8234, "SOL_FOOTSTEPS_01"),
    (8248, "SOL_FOOTSTEPS_08"),
    (8271, "SOL_HISS_01"),
    (8286, "SOL_SHORT_HISS_04"),
    (8304, "SOL_HISS_04"),
    (8332, "SOL_FOOTSTEPS_04"),
];

const ENVIRONMENT_SOUNDS: &[(i32, &str)] = &[
    (8050, "SOL_TOTEM_FIRST_BEAM_09"),
    (8053, "SOL_CRYSTAL_BEAM_CIRCLE_SPAWN_05"),
    (8059, "SOL_CRYSTAL_BEAM_TOP_PROJ_01"),
    (8062, "SOL_BOSS_CLAP_ATTACK_01"),
    (8070, "SOL_CRYSTAL_BEAM_CRYSTAL_SPAWN_01"),
    (8093, "SOL_CRYSTAL_BEAM_TOP_PROJ_11"),
    (8104, "SOL_CRYSTAL_BEAM_CIRCLE_SPAWN_03"),
    (8108, "SOL_TOTEM_FIRST_BEAM_05"),
    (8110, "SOL_CRYSTAL_BEAM_SPAWN_01"),
    (8111, "SOL_CRYSTAL_BEAM_TOP_PROJ_03"),
    (8136, "SOL_TOTEM_LINE_FUSE_HISS_EXPLOSION_06"),
    (8144, "SOL_CRYSTAL_BEAM_TOP_PROJ_04"),
    (8151, "SOL_TOTEM_FIRST_BEAM_07"),
    (8152, "SOL_TOTEM_LINE_FUSE_HISS_02"),
    (8164, "SOL_CRYSTAL_PROJ_SPAWN_01"),
    (8179, "SOL_CRYSTAL_BEAM_CIRCLE_SPAWN_01"),
    (8193, "SOL_CRYSTAL_BEAM_TOP_PROJ_06"),
    (8199, "SOL_CRYSTAL_BEAM_TOP_PROJ_09"),
    (8201, "SOL_CRYSTAL_BEAM_TOP_PROJ_10"),
    (8205, "SOL_CRYSTAL_BEAM_CIRCLE_SPAWN_04"),
    (8209, "SOL_CRYSTAL_BEAM_TOP_PROJ_05"),
    (8213, "SOL_TOTEM_LINE_FUSE_HISS_EXPLOSION_07"),
    (8227, "SOL_CRYSTAL_BEAM_TOP_PROJ_07"),
    (8228, "SOL_CRYSTAL_BEAM_TOP_PROJ_08"),
    (8230, "SOL_TOTEM_BEAM_EXPLOSION_01"),
    (8231, "SOL_TOTEM_FIRST_BEAM_06"),
    (8235, "SOL_TOTEM_FIRST_BEAM_02"),
    (8236, "SOL_CRYSTAL_BEAM_TOP_PROJ_02"),
    (8239, "SOL_CRYSTAL_PROJ_SPAWN_02"),
    (8246, "SOL_CRYSTAL_PROJ_SPAWN_BASS_01"),
    (8247, "SOL_TOTEM_FIRST_BEAM_03"),
    (8249, "SOL_TOTEM_LINE_FUSE_HISS_01"),
    (8253, "SOL_TOTEM_FIRST_BEAM_10"),
    (8259, "SOL_TOTEM_FIRST_BEAM_01"),
    (8268, "SOL_TOTEM_LINE_FUSE_HISS_EXPLOSION_01"),
    (8292, "SOL_CRYSTAL_BEAM_CIRCLE_SPAWN_02"),
    (8299, "SOL_TOTEM_FIRST_BEAM_04"),
    (8301, "SOL_TOTEM_FIRST_BEAM_08"),
    (8306, "SOL_TOTEM_LINE_FUSE_HISS_EXPLOSION_05"),
    (8313, "SOL_TOTEM_LINE_FUSE_HISS_EXPLOSION_04"),
];

const EXPLOSION_SOUNDS: &[(i32, &str)] = &[
    (8100, "EXPLOSION_05"),
    (8223, "EXPLOSION_04"),
    (8245, "EXPLOSION_07"),
    (8250, "METALIC_IMPACT_01"),
    (8252, "EXPLOSION_01"),
    (8273, "EXPLOSION_03"),
    (8296, "EXPLOSION_06"),
    (8309, "EXPLOSION_02"),
];
/// Boss attack a sound belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackType {
    Spear,
    Shield,
    Grapple,
    Triple,
    Death,
}

impl AttackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackType::Spear => "SPEAR",
            AttackType::Shield => "SHIELD",
            AttackType::Grapple => "GRAPPLE",
            AttackType::Triple => "TRIPLE",
            AttackType::Death => "DEATH",
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ATTACK_TABLES: &[(AttackType, &[(i32, &str)])] = &[
    (AttackType::Spear, SPEAR_SOUNDS),
    (AttackType::Shield, SHIELD_SOUNDS),
    (AttackType::Grapple, GRAPPLE_SOUNDS),
    (AttackType::Triple, TRIPLE_SOUNDS),
    (AttackType::Death, DEATH_SOUNDS),
];

const BOSS_TABLES: &[&[(i32, &str)]] = &[
    SPEAR_SOUNDS,
    SHIELD_SOUNDS,
    GRAPPLE_SOUNDS,
    TRIPLE_SOUNDS,
    DEATH_SOUNDS,
    ARENA_SOUNDS,
    AMBIENT_SOUNDS,
    ENVIRONMENT_SOUNDS,
    EXPLOSION_SOUNDS,
];

fn lookup(table: &[(i32, &'static str)], id: i32) -> Option<&'static str> {
    table.iter().find(|(key, _)| *key == id).map(|(_, name)| *name)
}

/// Name for a sound id, if known. Boss names win over the generic table.
pub fn sound_name(sound_id: i32) -> Option<&'static str> {
    BOSS_TABLES
        .iter()
        .find_map(|table| lookup(table, sound_id))
        .or_else(|| lookup(SOUND_NAMES, sound_id))
}

pub fn animation_name(animation: i32) -> Option<&'static str> {
    lookup(BOSS_ANIMATIONS, animation)
}

/// Attack that produces this sound, if any
pub fn attack_type(sound_id: i32) -> Option<AttackType> {
    ATTACK_TABLES
        .iter()
        .find(|(_, table)| lookup(table, sound_id).is_some())
        .map(|(attack, _)| *attack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_names() {
        assert_eq!(sound_name(60), Some("CLOSE_DOOR"));
        assert_eq!(sound_name(-5), None);
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(animation_name(10883), Some("SOL_HEREDIT_SPEAR_ATTACK_TELEGRAPH"));
        assert_eq!(animation_name(10888), Some("SOL_HEREDIT_DEATH"));
        assert_eq!(animation_name(-1), None);
    }

    #[test]
    fn test_attack_types() {
        let (spear_id, _) = SPEAR_SOUNDS[0];
        let (death_id, _) = DEATH_SOUNDS[0];
        let (arena_id, _) = ARENA_SOUNDS[0];

        assert_eq!(attack_type(spear_id), Some(AttackType::Spear));
        assert_eq!(attack_type(death_id), Some(AttackType::Death));
        assert_eq!(attack_type(arena_id), None);
        assert_eq!(attack_type(60), None);
        assert_eq!(AttackType::Grapple.to_string(), "GRAPPLE");
    }

    #[test]
    fn test_boss_sounds_are_named() {
        for table in BOSS_TABLES {
            for (id, name) in table.iter() {
                assert_eq!(sound_name(*id), Some(*name), "sound {}", id);
            }
        }
    }
}
