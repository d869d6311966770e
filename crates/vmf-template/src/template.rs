//! Declarative map descriptions that expand into a `Document`.

use serde::{Deserialize, Serialize};
use vmf_core::{
    Document, Editor, IdAllocator, Side, SideParams, Solid, VersionInfo, VersionInfoParams, World,
    WorldParams,
};

/// A whole map: version info, world settings and solids. Every section is
/// optional and falls back to the default table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapTemplate {
    pub version_info: VersionInfoParams,
    pub world: WorldParams,
    pub solids: Vec<SolidTemplate>,
}

/// One solid and the sides to bind into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolidTemplate {
    pub editor: Editor,
    pub sides: Vec<SideBinding>,
}

/// A side plus the 1-based slot it is bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideBinding {
    pub slot: usize,
    #[serde(default)]
    pub side: SideParams,
}

/// Build a document from a template.
///
/// Ids are consumed in document order: the world, then for each solid the
/// solid itself followed by its sides as listed. Bindings to slots outside
/// 1..=6 still consume an id for the side, which is then dropped.
pub fn instantiate(template: &MapTemplate, ids: &IdAllocator) -> Document {
    let version_info = VersionInfo::new(template.version_info);
    let mut world = World::new(ids, template.world.clone());

    for solid_template in &template.solids {
        let mut solid = Solid::new(ids, solid_template.editor);
        for binding in &solid_template.sides {
            let side = Side::new(ids, binding.side.clone());
            solid.bind_side(side, binding.slot);
        }
        world.add_solid(solid);
    }

    Document::new(version_info, world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmf_core::EntityId;

    fn binding(slot: usize, material: &str) -> SideBinding {
        SideBinding {
            slot,
            side: SideParams {
                material: Some(material.to_owned()),
                ..SideParams::default()
            },
        }
    }

    #[test]
    fn test_empty_template_is_default_document() {
        let ids = IdAllocator::new();
        let doc = instantiate(&MapTemplate::default(), &ids);
        assert_eq!(doc, Document::placeholder(&IdAllocator::new()));
    }

    #[test]
    fn test_ids_follow_document_order() {
        let template = MapTemplate {
            solids: vec![
                SolidTemplate {
                    editor: Editor::default(),
                    sides: vec![binding(2, "A"), binding(1, "B")],
                },
                SolidTemplate {
                    editor: Editor::default(),
                    sides: vec![binding(6, "C")],
                },
            ],
            ..MapTemplate::default()
        };
        let ids = IdAllocator::new();
        let doc = instantiate(&template, &ids);

        assert_eq!(doc.world.id, EntityId(1));
        let first = &doc.world.solids()[0];
        assert_eq!(first.id, EntityId(2));
        assert_eq!(first.side(2).map(|s| s.id), Some(EntityId(3)));
        assert_eq!(first.side(1).map(|s| s.id), Some(EntityId(4)));
        let second = &doc.world.solids()[1];
        assert_eq!(second.id, EntityId(5));
        assert_eq!(second.side(6).map(|s| s.id), Some(EntityId(6)));
        assert_eq!(ids.peek(), EntityId(7));
    }

    #[test]
    fn test_out_of_range_binding_consumes_id_but_is_dropped() {
        let template = MapTemplate {
            solids: vec![SolidTemplate {
                editor: Editor::default(),
                sides: vec![binding(9, "LOST"), binding(1, "KEPT")],
            }],
            ..MapTemplate::default()
        };
        let ids = IdAllocator::new();
        let doc = instantiate(&template, &ids);
        let solid = &doc.world.solids()[0];
        assert_eq!(solid.bound_side_count(), 1);
        assert_eq!(solid.side(1).map(|s| s.id), Some(EntityId(4)));
    }
}
