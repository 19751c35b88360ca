use mdl_parser::{
    parse, FilterMode, FrameFlags, GeosetAnimFlags, LightType, LineType, NodeFlags, NodeKind,
    ParticleEmitter2FilterMode, ParticleEmitter2Flags, ParticleEmitterFlags, RenderModeFlags,
    ShadingFlags, TextureFlags,
};

#[test]
fn version_only() {
    let model = parse("Version { FormatVersion 800, }").unwrap();
    assert_eq!(model.version, 800);
    assert!(model.sequences.is_empty());
    assert!(model.textures.is_empty());
    assert!(model.geosets.is_empty());
    assert!(model.nodes.is_empty());
}

#[test]
fn model_info_header() {
    let model = parse(
        "Model \"Zeppelin\" { BlendTime 150, MinimumExtent { -1, -2, -3 }, MaximumExtent { 1, 2, 3 }, }",
    )
    .unwrap();
    assert_eq!(model.info.name, "Zeppelin");
    assert_eq!(model.info.blend_time, 150);
    assert_eq!(model.info.minimum_extent, [-1.0, -2.0, -3.0]);
    assert_eq!(model.info.maximum_extent, [1.0, 2.0, 3.0]);
}

#[test]
fn geoset_anim_hermite_alpha() {
    let model = parse(
        "GeosetAnim { Alpha { 2, Hermite, 0: 0.0, InTan 0.1, OutTan 0.2, 10: 1.0, InTan 0.3, OutTan 0.4, } }",
    )
    .unwrap();
    let track = model.geoset_anims[0].alpha.as_track().unwrap();
    assert_eq!(track.line_type, LineType::Hermite);
    assert_eq!(track.keyframes.len(), 2);
    assert_eq!(track.keyframes[0].frame, 0);
    assert_eq!(track.keyframes[0].value, vec![0.0]);
    assert_eq!(track.keyframes[0].in_tan, vec![0.1]);
    assert_eq!(track.keyframes[0].out_tan, vec![0.2]);
    assert_eq!(track.keyframes[1].frame, 10);
    assert_eq!(track.keyframes[1].value, vec![1.0]);
    assert_eq!(track.keyframes[1].in_tan, vec![0.3]);
    assert_eq!(track.keyframes[1].out_tan, vec![0.4]);
}

#[test]
fn geoset_anim_static_color_is_rgb() {
    let model = parse("GeosetAnim { static Color { 0.1, 0.2, 0.3 }, }").unwrap();
    let color = model.geoset_anims[0].color.as_ref().unwrap();
    assert_eq!(color.as_static(), Some(&[0.3, 0.2, 0.1]));
}

#[test]
fn texture_flags_promote() {
    let model =
        parse("Textures { 1 Bitmap { Image \"foo.blp\", WrapWidth, WrapHeight, } }").unwrap();
    assert_eq!(model.textures.len(), 1);
    assert_eq!(model.textures[0].image, "foo.blp");
    assert_eq!(
        model.textures[0].flags,
        TextureFlags::WRAP_WIDTH | TextureFlags::WRAP_HEIGHT
    );
}

#[test]
fn unknown_top_level_block_is_skipped() {
    let model = parse("FaceFX { Anim { Path \"x\", }, } Version { FormatVersion 800, }").unwrap();
    assert_eq!(model.version, 800);
    assert!(model.sequences.is_empty());
    assert!(model.attachments.is_empty());
}

#[test]
fn unknown_block_with_braces_in_strings() {
    let source = "Weird \"prefix\" { Name \"curly } brace\", Nested { 1, 2, { 3 } } }\nVersion { FormatVersion 900 }";
    let model = parse(source).unwrap();
    assert_eq!(model.version, 900);
}

#[test]
fn sequences_keep_source_order() {
    let source = r#"
        Sequences 2 {
            Anim "Stand" {
                Interval { 0, 1000 },
                MoveSpeed 270,
                MinimumExtent { -25, -25, 0 },
                MaximumExtent { 25, 25, 80 },
                BoundsRadius 60,
            }
            Anim "Death" {
                Interval { 1100, 2000 },
                NonLooping,
                Rarity 3,
            }
        }
    "#;
    let model = parse(source).unwrap();
    assert_eq!(model.sequences.len(), 2);
    let stand = &model.sequences[0];
    assert_eq!(stand.name, "Stand");
    assert_eq!(stand.interval, [0, 1000]);
    assert_eq!(stand.move_speed, Some(270.0));
    assert_eq!(stand.bounds_radius, 60.0);
    assert!(!stand.non_looping);
    let death = &model.sequences[1];
    assert_eq!(death.name, "Death");
    assert_eq!(death.interval, [1100, 2000]);
    assert!(death.non_looping);
    assert_eq!(death.rarity, Some(3.0));
}

#[test]
fn global_sequence_durations() {
    let model = parse("GlobalSequences 2 { Duration 3000, Duration 500, }").unwrap();
    assert_eq!(model.global_sequences, vec![3000, 500]);

    // Count placed inside the braces is tolerated like other list blocks.
    let model = parse("GlobalSequences { 2 Duration 3000, Duration 500, }").unwrap();
    assert_eq!(model.global_sequences, vec![3000, 500]);
}

#[test]
fn material_layers_and_flags() {
    let source = r#"
        Materials 1 {
            Material {
                ConstantColor,
                PriorityPlane -1,
                Layer {
                    FilterMode Additive,
                    Unshaded,
                    TwoSided,
                    static TextureID 2,
                    CoordId 0,
                    TVertexAnimId 0,
                    Alpha 2 {
                        Linear,
                        GlobalSeqId 0,
                        0: 1,
                        1500: 0.5,
                    },
                }
            }
        }
    "#;
    let model = parse(source).unwrap();
    let material = &model.materials[0];
    assert_eq!(material.render_mode, RenderModeFlags::CONSTANT_COLOR);
    assert_eq!(material.priority_plane, Some(-1));
    let layer = &material.layers[0];
    assert_eq!(layer.filter_mode, FilterMode::Additive);
    assert_eq!(
        layer.shading,
        ShadingFlags::UNSHADED | ShadingFlags::TWO_SIDED
    );
    assert_eq!(layer.texture_id.as_static(), Some(&2));
    assert_eq!(layer.tvertex_anim_id, 0);
    let alpha = layer.alpha.as_track().unwrap();
    assert_eq!(alpha.line_type, LineType::Linear);
    assert_eq!(alpha.global_seq_id, Some(0));
    assert_eq!(alpha.keyframes.len(), 2);
    assert_eq!(alpha.keyframes[1].value, vec![0.5]);
}

#[test]
fn unknown_keyword_in_materials_is_fatal() {
    let err = parse("Materials 1 { Material { Sparkle 3, } }").unwrap_err();
    assert!(err.message.contains("Sparkle"));
}

#[test]
fn geoset_buffers() {
    let source = r#"
        Geoset {
            Vertices 3 {
                { 0, 0, 0 },
                { 1, 0, 0 },
                { 0, 1, 0 },
            },
            Normals 3 {
                { 0, 0, 1 },
                { 0, 0, 1 },
                { 0, 0, 1 },
            },
            TVertices 3 {
                { 0, 0 },
                { 1, 0 },
                { 0, 1 },
            },
            VertexGroup {
                0,
                0,
                1,
            },
            Faces 1 3 {
                Triangles {
                    { 0, 1, 2 },
                },
            },
            Groups 2 3 {
                Matrices { 0 },
                Matrices { 1, 2 },
            },
            MinimumExtent { -1, -1, -1 },
            MaximumExtent { 1, 1, 1 },
            BoundsRadius 2,
            Anim {
                Alpha 0.5,
                MinimumExtent { -1, -1, -1 },
                MaximumExtent { 1, 1, 1 },
                BoundsRadius 2,
            },
            Anim {
                Color { 0.5, 0.6, 0.7 },
            },
            MaterialID 4,
            SelectionGroup 1,
            Unselectable,
        }
    "#;
    let model = parse(source).unwrap();
    let geoset = &model.geosets[0];
    assert_eq!(geoset.vertices.len(), 9);
    assert_eq!(geoset.normals.len(), 9);
    assert_eq!(geoset.tvertices.len(), 1);
    assert_eq!(geoset.tvertices[0], vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    assert_eq!(geoset.vertex_group, vec![0, 0, 1]);
    assert_eq!(geoset.faces, vec![0, 1, 2]);
    assert_eq!(geoset.groups, vec![vec![0], vec![1, 2]]);
    assert_eq!(geoset.total_groups_count, 3);
    assert_eq!(geoset.material_id, 4);
    assert_eq!(geoset.selection_group, 1);
    assert!(geoset.unselectable);
    assert_eq!(geoset.anims.len(), 2);
    assert_eq!(geoset.anims[0].alpha, 0.5);
    assert_eq!(geoset.anims[0].color, None);
    // Geoset-level tints keep their source order.
    assert_eq!(geoset.anims[1].alpha, 1.0);
    assert_eq!(geoset.anims[1].color, Some([0.5, 0.6, 0.7]));
}

#[test]
fn bones_and_helpers_stay_out_of_flat_list() {
    let source = r#"
        Bone "Root" {
            ObjectId 0,
            BillboardedLockY,
            GeosetId Multiple,
            GeosetAnimId None,
            Translation 1 {
                Hermite,
                0: { 0, 0, 0 },
                InTan { 0.1, 0.1, 0.1 },
                OutTan { 0.2, 0.2, 0.2 },
            },
        }
        Bone "Arm" {
            ObjectId 1,
            Parent 0,
            DontInherit { Translation, Scaling },
            Billboarded,
        }
        Helper "Effects" {
            ObjectId 2,
            Parent 0,
        }
    "#;
    let model = parse(source).unwrap();
    assert_eq!(model.bones.len(), 2);
    assert_eq!(model.helpers.len(), 1);
    assert!(model.nodes.is_empty());

    let root = &model.bones[0];
    assert_eq!(root.name, "Root");
    assert_eq!(root.parent_id, -1);
    assert!(root.flags.contains(NodeFlags::BONE));
    assert!(root.flags.contains(NodeFlags::BILLBOARDED_LOCK_Y));
    assert!(matches!(
        root.extras.get("GeosetId"),
        Some(mdl_parser::ExtraValue::Keyword(word)) if word == "Multiple"
    ));
    let translation = root.translation.as_ref().unwrap();
    assert_eq!(translation.keyframes[0].value, vec![0.0, 0.0, 0.0]);
    assert_eq!(translation.keyframes[0].in_tan, vec![0.1, 0.1, 0.1]);

    let arm = &model.bones[1];
    assert_eq!(arm.parent_id, 0);
    assert!(arm.flags.contains(
        NodeFlags::BONE
            | NodeFlags::BILLBOARDED
            | NodeFlags::DONT_INHERIT_TRANSLATION
            | NodeFlags::DONT_INHERIT_SCALING
    ));
    assert!(!arm.flags.contains(NodeFlags::DONT_INHERIT_ROTATION));

    assert!(model.helpers[0].flags.contains(NodeFlags::HELPER));
}

#[test]
fn pivots_attach_by_flat_index() {
    let source = r#"
        Bone "Root" {
            ObjectId 0,
        }
        PivotPoints 3 {
            { 0, 0, 1 },
            { 0, 0, 2 },
            { 0, 0, 3 },
        }
        EventObject "SNDxDEAT" {
            ObjectId 1,
            EventTrack 2 {
                1100,
                1900,
            },
        }
        CollisionShape "Collision01" {
            ObjectId 2,
            Sphere,
            Vertices 1 {
                { 0, 0, 40 },
            },
            BoundsRadius 30,
        }
    "#;
    let model = parse(source).unwrap();
    assert_eq!(model.nodes.len(), 2);
    assert_eq!(model.nodes[0].kind, NodeKind::EventObject);
    assert_eq!(model.nodes[1].kind, NodeKind::CollisionShape);

    // Pivot 0 goes to the first flat-list node, not to the bone.
    assert_eq!(model.bones[0].pivot_point, None);
    assert_eq!(model.event_objects[0].node.pivot_point, Some([0.0, 0.0, 1.0]));
    assert_eq!(
        model.collision_shapes[0].node.pivot_point,
        Some([0.0, 0.0, 2.0])
    );
    assert_eq!(model.pivot_points.len(), 3);

    assert_eq!(model.event_objects[0].event_track, vec![1100, 1900]);
    let shape = &model.collision_shapes[0];
    assert_eq!(shape.shape, mdl_parser::CollisionShapeType::Sphere);
    assert_eq!(shape.vertices, vec![0.0, 0.0, 40.0]);
    assert_eq!(shape.bounds_radius, Some(30.0));
}

#[test]
fn pivot_list_shorter_than_nodes() {
    let source = r#"
        PivotPoints 1 {
            { 1, 2, 3 },
        }
        Light "A" { ObjectId 0, }
        Light "B" { ObjectId 1, }
    "#;
    let model = parse(source).unwrap();
    assert_eq!(model.lights[0].node.pivot_point, Some([1.0, 2.0, 3.0]));
    assert_eq!(model.lights[1].node.pivot_point, None);
}

#[test]
fn particle_emitter2_full_body() {
    let source = r#"
        ParticleEmitter2 "Blood" {
            ObjectId 6,
            Parent 0,
            SortPrimsFarZ,
            Unshaded,
            static Speed 100,
            static Variation 0.5,
            static Latitude 10,
            static Gravity 50,
            Squirt,
            LifeSpan 0.8,
            static EmissionRate 20,
            static Width 20,
            static Length 20,
            Blend,
            Rows 4,
            Columns 4,
            Head,
            Tail,
            TailLength 1,
            Time 0.3,
            SegmentColor {
                Color { 1.0, 0.5, 0.0 },
                Color { 0.0, 0.5, 1.0 },
            },
            Alpha { 255, 128, 0 },
            ParticleScaling { 1, 2, 3 },
            LifeSpanUVAnim { 0, 15, 1 },
            DecayUVAnim { 15, 15, 1 },
            TailUVAnim { 0, 0, 1 },
            TailDecayUVAnim { 0, 0, 1 },
        }
    "#;
    let model = parse(source).unwrap();
    let emitter = &model.particle_emitters2[0];
    assert_eq!(emitter.node.name, "Blood");
    assert!(emitter.node.flags.contains(NodeFlags::PARTICLE_EMITTER));
    assert_eq!(
        emitter.flags,
        ParticleEmitter2Flags::SORT_PRIMS_FAR_Z | ParticleEmitter2Flags::UNSHADED
    );
    assert_eq!(emitter.frame_flags, FrameFlags::HEAD | FrameFlags::TAIL);
    assert_eq!(emitter.filter_mode, ParticleEmitter2FilterMode::Blend);
    assert_eq!(emitter.speed.as_static(), Some(&100.0));
    assert!(emitter.squirt);
    // Segment colors arrive blue-first and land red-first.
    assert_eq!(emitter.segment_color[0], [0.0, 0.5, 1.0]);
    assert_eq!(emitter.segment_color[1], [1.0, 0.5, 0.0]);
    assert_eq!(emitter.alpha, [255, 128, 0]);
    assert_eq!(emitter.particle_scaling, [1.0, 2.0, 3.0]);
    assert_eq!(emitter.life_span_uv_anim, [0, 15, 1]);
    assert_eq!(emitter.decay_uv_anim, [15, 15, 1]);
    // Loose scalars are retained as extras.
    assert!(matches!(
        emitter.node.extras.get("Rows"),
        Some(mdl_parser::ExtraValue::Number(n)) if *n == 4.0
    ));
    assert!(emitter.node.extras.contains_key("LifeSpan"));
    assert_eq!(model.nodes[0].kind, NodeKind::ParticleEmitter2);
}

#[test]
fn legacy_particle_emitter() {
    let source = r#"
        ParticleEmitter "Smoke" {
            ObjectId 9,
            EmitterUsesMDL,
            static EmissionRate 2,
            static Gravity 0,
            static Longitude 0.1,
            static Latitude 0.2,
            static LifeSpan 0.5,
            Visibility 1 {
                DontInterp,
                0: 1,
            },
            Particle {
                static LifeSpan 1.5,
                static InitVelocity 120,
                Path "Objects\\Spawnmodels\\smoke.mdl",
            },
        }
    "#;
    let model = parse(source).unwrap();
    let emitter = &model.particle_emitters[0];
    assert_eq!(emitter.flags, ParticleEmitterFlags::EMITTER_USES_MDL);
    assert_eq!(emitter.emission_rate.as_static(), Some(&2.0));
    assert_eq!(emitter.longitude.as_static(), Some(&0.1));
    // The Particle block wrote LifeSpan after the top level did.
    assert_eq!(emitter.life_span.as_static(), Some(&1.5));
    assert_eq!(emitter.init_velocity.as_static(), Some(&120.0));
    assert_eq!(emitter.path.as_deref(), Some(r"Objects\\Spawnmodels\\smoke.mdl"));
    assert!(emitter.visibility.is_animated());
    // Legacy emitters never join the flat node list.
    assert!(model.nodes.is_empty());
}

#[test]
fn light_colors_are_rgb() {
    let source = r#"
        Light "Lamp" {
            ObjectId 7,
            Ambient,
            static Color { 0.2, 0.4, 0.8 },
            AmbColor 1 {
                DontInterp,
                0: { 0.1, 0.2, 0.3 },
            },
            static Intensity 2,
            static AttenuationStart 80,
            static AttenuationEnd 200,
        }
    "#;
    let model = parse(source).unwrap();
    let light = &model.lights[0];
    assert_eq!(light.light_type, LightType::Ambient);
    assert!(light.node.flags.contains(NodeFlags::LIGHT));
    let color = light.color.as_ref().unwrap();
    assert_eq!(color.as_static(), Some(&[0.8, 0.4, 0.2]));
    let amb = light.amb_color.as_ref().unwrap().as_track().unwrap();
    assert_eq!(amb.keyframes[0].value, vec![0.3, 0.2, 0.1]);
    assert_eq!(light.intensity.as_static(), Some(&2.0));
    assert_eq!(light.attenuation_end.as_static(), Some(&200.0));
}

#[test]
fn ribbon_emitter_channels() {
    let source = r#"
        RibbonEmitter "Trail" {
            ObjectId 8,
            static HeightAbove 5,
            static HeightBelow 2,
            static Alpha 0.9,
            static Color { 0.1, 0.2, 0.9 },
            TextureSlot 1 {
                DontInterp,
                0: 2,
            },
            LifeSpan 0.4,
            EmissionRate 30,
            Rows 1,
            Columns 1,
            MaterialID 5,
            Gravity 0,
            Visibility 1 {
                DontInterp,
                0: 1,
            },
        }
    "#;
    let model = parse(source).unwrap();
    let ribbon = &model.ribbon_emitters[0];
    assert!(ribbon.node.flags.contains(NodeFlags::RIBBON_EMITTER));
    assert_eq!(ribbon.height_above.as_static(), Some(&5.0));
    assert_eq!(ribbon.color.as_static(), Some(&[0.9, 0.2, 0.1]));
    let slot = ribbon.texture_slot.as_track().unwrap();
    assert_eq!(slot.keyframes[0].value, vec![2]);
    assert_eq!(ribbon.life_span, 0.4);
    assert_eq!(ribbon.material_id, 5);
    assert!(ribbon.node.visibility.is_some());
    assert_eq!(model.nodes[0].kind, NodeKind::RibbonEmitter);
}

#[test]
fn camera_roll_is_single_component() {
    let source = r#"
        Camera "Portrait" {
            Position { 100, 0, 60 },
            FieldOfView 0.7854,
            NearClip 16,
            FarClip 10000,
            Target {
                Position { 0, 0, 50 },
                Translation 1 {
                    DontInterp,
                    0: { 1, 1, 1 },
                },
            },
            Rotation 1 {
                Linear,
                0: 0.5,
            },
        }
    "#;
    let model = parse(source).unwrap();
    let camera = &model.cameras[0];
    assert_eq!(camera.name, "Portrait");
    assert_eq!(camera.position, [100.0, 0.0, 60.0]);
    assert_eq!(camera.near_clip, 16.0);
    assert_eq!(camera.target_position, [0.0, 0.0, 50.0]);
    let target = camera.target_translation.as_ref().unwrap();
    assert_eq!(target.keyframes[0].value, vec![1.0, 1.0, 1.0]);
    let roll = camera.rotation.as_ref().unwrap();
    assert_eq!(roll.keyframes[0].value.len(), 1);
    // Cameras are not nodes.
    assert!(model.nodes.is_empty());
}

#[test]
fn texture_anim_tracks() {
    let source = r#"
        TextureAnims 1 {
            TVertexAnim {
                Translation 1 {
                    Linear,
                    0: { 0, 0.1, 0 },
                },
            },
        }
    "#;
    let model = parse(source).unwrap();
    let anim = &model.texture_anims[0];
    let translation = anim.translation.as_ref().unwrap();
    assert_eq!(translation.line_type, LineType::Linear);
    assert_eq!(translation.keyframes[0].value, vec![0.0, 0.1, 0.0]);
    assert!(anim.rotation.is_none());
}

#[test]
fn attachment_path_and_geoset_anim_flags() {
    let source = r#"
        Attachment "Overhead Ref" {
            ObjectId 3,
            AttachmentID 0,
            Path "units\\human\\footman\\footman.mdl",
        }
        GeosetAnim {
            GeosetId 0,
            DropShadow,
            static Alpha 0.75,
        }
    "#;
    let model = parse(source).unwrap();
    let attachment = &model.attachments[0];
    assert_eq!(attachment.node.name, "Overhead Ref");
    assert!(attachment.node.flags.contains(NodeFlags::ATTACHMENT));
    assert_eq!(
        attachment.path.as_deref(),
        Some(r"units\\human\\footman\\footman.mdl")
    );
    assert!(attachment.node.extras.contains_key("AttachmentID"));

    let anim = &model.geoset_anims[0];
    assert_eq!(anim.geoset_id, 0);
    assert_eq!(anim.flags, GeosetAnimFlags::DROP_SHADOW);
    assert_eq!(anim.alpha.as_static(), Some(&0.75));
}

#[test]
fn comments_between_tokens() {
    let source = "// exported\nVersion { // inline\n FormatVersion // value follows\n 800, }";
    let model = parse(source).unwrap();
    assert_eq!(model.version, 800);
}

#[test]
fn syntax_error_carries_offset() {
    let err = parse("Version ( FormatVersion 800 )").unwrap_err();
    assert_eq!(err.offset, 8);
    assert!(err.message.contains('{'));
}

#[test]
fn error_discards_partial_model() {
    assert!(parse("Sequences 1 { Bitmap { } }").is_err());
}

#[test]
fn empty_source_gives_default_model() {
    let model = parse("").unwrap();
    assert_eq!(model.version, 800);
    assert_eq!(model.info.blend_time, 150);
    assert!(model.nodes.is_empty());
}
