//! Test model: a FreeCAD cylinder placed as a wall in a default project.

use bimstep_model::{EntityId, Model, Value};

pub const EXPECTED_DATA_SECTION: &str = "\
#1=IFCPERSON($,$,'',$,$,$,$,$);
#2=IFCORGANIZATION($,'',$,$,$);
#3=IFCPERSONANDORGANIZATION(#1,#2,$);
#4=IFCAPPLICATION(#2,'0.18 build 4 (GitTag)','FreeCAD','118df2cf_ed21_438e_a41');
#5=IFCOWNERHISTORY(#3,#4,$,.ADDED.,$,#3,#4,1586902585);
#6=IFCCARTESIANPOINT((0.0,0.0,0.0));
#7=IFCDIRECTION((0.0,0.0,1.0));
#8=IFCDIRECTION((1.0,0.0,0.0));
#9=IFCAXIS2PLACEMENT3D(#6,#7,#8);
#10=IFCDIRECTION((0.0,1.0,0.0));
#11=IFCGEOMETRICREPRESENTATIONCONTEXT('Plan','Model',3,1.0E-5,#9,#10);
#12=IFCSIUNIT(*,.LENGTHUNIT.,$,.METRE.);
#13=IFCSIUNIT(*,.AREAUNIT.,$,.SQUARE_METRE.);
#14=IFCSIUNIT(*,.VOLUMEUNIT.,$,.CUBIC_METRE.);
#15=IFCDIMENSIONALEXPONENTS(0,0,0,0,0,0,0);
#16=IFCSIUNIT(*,.PLANEANGLEUNIT.,$,.RADIAN.);
#17=IFCMEASUREWITHUNIT(IFCPLANEANGLEMEASURE(0.017453292519943295),#16);
#18=IFCCONVERSIONBASEDUNIT(#15,.PLANEANGLEUNIT.,'DEGREE',#17);
#19=IFCUNITASSIGNMENT((#12,#13,#14,#18));
#20=IFCPROJECT('51f413ef_7964_4d38_b19',#5,'Unnamed',$,$,$,$,(#11),#19);
#21=IFCSITE('2KdG88VfqHwfDCN5zdz5Bw',#5,'Default Site','',$,$,$,$,.ELEMENT.,$,$,$,$,$);
#22=IFCBUILDING('2KdHMSVfqHwfiJN5zdz5Bw',#5,'Default Building','',$,$,$,$,.ELEMENT.,$,$,$);
#23=IFCBUILDINGSTOREY('2KdHMUVfqHwg4XN5zdz5Bw',#5,'Default Storey','',$,$,$,$,.ELEMENT.,$);
#24=IFCLOCALPLACEMENT($,#9);
#25=IFCCARTESIANPOINT((0.0,0.0));
#26=IFCDIRECTION((1.0,0.0));
#27=IFCAXIS2PLACEMENT2D(#25,#26);
#28=IFCCIRCLEPROFILEDEF(.AREA.,$,#27,0.1);
#29=IFCCARTESIANPOINT((-1.4210854715202E-17,-2.73641172593403E-18,0.0));
#30=IFCAXIS2PLACEMENT3D(#29,#7,#8);
#31=IFCEXTRUDEDAREASOLID(#28,#30,#7,0.1);
#32=IFCCOLOURRGB($,1.0,1.0,1.0);
#33=IFCSURFACESTYLERENDERING(#32,$,$,$,$,$,$,$,.FLAT.);
#34=IFCSURFACESTYLE($,.BOTH.,(#33));
#35=IFCPRESENTATIONSTYLEASSIGNMENT((#34));
#36=IFCSTYLEDITEM(#31,(#35),$);
#37=IFCSHAPEREPRESENTATION(#11,'Body','SweptSolid',(#31));
#38=IFCPRODUCTDEFINITIONSHAPE($,$,(#37));
#39=IFCWALL('2KcxKeVfqHwhb6N5zdz5Bw',#5,'Wall','',$,#24,#38,$);
#40=IFCRELCONTAINEDINSPATIALSTRUCTURE('2KdIamVfqHwf$aN5zdz5Bw',#5,'UnassignedObjectsLink','',(#39),#23);
#41=IFCRELAGGREGATES('2KdHMVVfqHwhFMN5zdz5Bw',#5,'DefaultStoreyLink','',#22,(#23));
#42=IFCRELAGGREGATES('2KdHMTVfqHwePlN5zdz5Bw',#5,'SiteLink','',#21,(#22));
#43=IFCRELAGGREGATES('2KdG89VfqHweGDN5zdz5Bw',#5,'ProjectLink','',#20,(#21));
";

fn build(model: &mut Model<'static>, type_name: &str, values: &[(&str, Value)]) -> EntityId {
    values
        .iter()
        .fold(model.create(type_name), |builder, (name, value)| {
            builder.set(name, value.clone())
        })
        .build()
        .unwrap()
}

fn point(model: &mut Model<'static>, coordinates: &[f64]) -> EntityId {
    build(model, "IfcCartesianPoint", &[("Coordinates", Value::list(coordinates.to_vec()))])
}

fn direction(model: &mut Model<'static>, ratios: &[f64]) -> EntityId {
    build(model, "IfcDirection", &[("DirectionRatios", Value::list(ratios.to_vec()))])
}

fn si_unit(model: &mut Model<'static>, unit_type: &str, name: &str) -> EntityId {
    build(
        model,
        "IfcSIUnit",
        &[
            ("UnitType", Value::enumeration(unit_type)),
            ("Name", Value::enumeration(name)),
        ],
    )
}

fn rooted(
    model: &mut Model<'static>,
    type_name: &str,
    global_id: &str,
    owner_history: EntityId,
    name: &str,
    rest: &[(&str, Value)],
) -> EntityId {
    let mut values = vec![
        ("GlobalId", Value::from(global_id)),
        ("OwnerHistory", Value::from(owner_history)),
        ("Name", Value::from(name)),
    ];
    values.extend(rest.iter().cloned());
    build(model, type_name, &values)
}

/// The cylinder model and its project entity.
///
/// Entities are created children first, relationship entities last. The
/// two placements of the cylinder share their axis directions.
pub fn cylinder_model() -> (Model<'static>, EntityId) {
    let mut model = Model::ifc2x3();
    let m = &mut model;

    let person = build(m, "IfcPerson", &[("GivenName", "".into())]);
    let organization = build(m, "IfcOrganization", &[("Name", "".into())]);
    let person_and_org = build(
        m,
        "IfcPersonAndOrganization",
        &[("ThePerson", person.into()), ("TheOrganization", organization.into())],
    );
    let application = build(
        m,
        "IfcApplication",
        &[
            ("ApplicationDeveloper", organization.into()),
            ("Version", "0.18 build 4 (GitTag)".into()),
            ("ApplicationFullName", "FreeCAD".into()),
            ("ApplicationIdentifier", "118df2cf_ed21_438e_a41".into()),
        ],
    );
    let owner_history = build(
        m,
        "IfcOwnerHistory",
        &[
            ("OwningUser", person_and_org.into()),
            ("OwningApplication", application.into()),
            ("ChangeAction", Value::enumeration("ADDED")),
            ("LastModifyingUser", person_and_org.into()),
            ("LastModifyingApplication", application.into()),
            ("CreationDate", Value::Integer(1586902585)),
        ],
    );

    let origin = point(m, &[0.0, 0.0, 0.0]);
    let z_axis = direction(m, &[0.0, 0.0, 1.0]);
    let x_axis = direction(m, &[1.0, 0.0, 0.0]);
    let world = build(
        m,
        "IfcAxis2Placement3D",
        &[
            ("Location", origin.into()),
            ("Axis", z_axis.into()),
            ("RefDirection", x_axis.into()),
        ],
    );
    let true_north = direction(m, &[0.0, 1.0, 0.0]);
    let context = build(
        m,
        "IfcGeometricRepresentationContext",
        &[
            ("ContextIdentifier", "Plan".into()),
            ("ContextType", "Model".into()),
            ("CoordinateSpaceDimension", Value::Integer(3)),
            ("Precision", 1.0e-5.into()),
            ("WorldCoordinateSystem", world.into()),
            ("TrueNorth", true_north.into()),
        ],
    );

    let angle_exponents = build(
        m,
        "IfcDimensionalExponents",
        &[
            ("LengthExponent", Value::Integer(0)),
            ("MassExponent", Value::Integer(0)),
            ("TimeExponent", Value::Integer(0)),
            ("ElectricCurrentExponent", Value::Integer(0)),
            ("ThermodynamicTemperatureExponent", Value::Integer(0)),
            ("AmountOfSubstanceExponent", Value::Integer(0)),
            ("LuminousIntensityExponent", Value::Integer(0)),
        ],
    );
    let metre = si_unit(m, "LENGTHUNIT", "METRE");
    let square_metre = si_unit(m, "AREAUNIT", "SQUARE_METRE");
    let cubic_metre = si_unit(m, "VOLUMEUNIT", "CUBIC_METRE");
    let radian = si_unit(m, "PLANEANGLEUNIT", "RADIAN");
    let conversion_factor = build(
        m,
        "IfcMeasureWithUnit",
        &[
            (
                "ValueComponent",
                Value::typed("IfcPlaneAngleMeasure", 0.017453292519943295),
            ),
            ("UnitComponent", radian.into()),
        ],
    );
    let degree = build(
        m,
        "IfcConversionBasedUnit",
        &[
            ("Dimensions", angle_exponents.into()),
            ("UnitType", Value::enumeration("PLANEANGLEUNIT")),
            ("Name", "DEGREE".into()),
            ("ConversionFactor", conversion_factor.into()),
        ],
    );
    let units = build(
        m,
        "IfcUnitAssignment",
        &[("Units", Value::list([metre, square_metre, cubic_metre, degree]))],
    );

    let project = rooted(
        m,
        "IfcProject",
        "51f413ef_7964_4d38_b19",
        owner_history,
        "Unnamed",
        &[
            ("RepresentationContexts", Value::list([context])),
            ("UnitsInContext", units.into()),
        ],
    );

    let profile_origin = point(m, &[0.0, 0.0]);
    let profile_x = direction(m, &[1.0, 0.0]);
    let profile_placement = build(
        m,
        "IfcAxis2Placement2D",
        &[
            ("Location", profile_origin.into()),
            ("RefDirection", profile_x.into()),
        ],
    );
    let circle = build(
        m,
        "IfcCircleProfileDef",
        &[
            ("ProfileType", Value::enumeration("AREA")),
            ("Position", profile_placement.into()),
            ("Radius", 0.1.into()),
        ],
    );
    let cylinder_origin = point(m, &[-1.4210854715202E-17, -2.73641172593403E-18, 0.0]);
    let cylinder_placement = build(
        m,
        "IfcAxis2Placement3D",
        &[
            ("Location", cylinder_origin.into()),
            ("Axis", z_axis.into()),
            ("RefDirection", x_axis.into()),
        ],
    );
    let cylinder = build(
        m,
        "IfcExtrudedAreaSolid",
        &[
            ("SweptArea", circle.into()),
            ("Position", cylinder_placement.into()),
            ("ExtrudedDirection", z_axis.into()),
            ("Depth", 0.1.into()),
        ],
    );

    let colour = build(
        m,
        "IfcColourRgb",
        &[("Red", 1.0.into()), ("Green", 1.0.into()), ("Blue", 1.0.into())],
    );
    let rendering = build(
        m,
        "IfcSurfaceStyleRendering",
        &[
            ("SurfaceColour", colour.into()),
            ("ReflectanceMethod", Value::enumeration("FLAT")),
        ],
    );
    let surface_style = build(
        m,
        "IfcSurfaceStyle",
        &[
            ("Side", Value::enumeration("BOTH")),
            ("Styles", Value::list([rendering])),
        ],
    );
    let style_assignment = build(
        m,
        "IfcPresentationStyleAssignment",
        &[("Styles", Value::list([surface_style]))],
    );
    build(
        m,
        "IfcStyledItem",
        &[
            ("Item", cylinder.into()),
            ("Styles", Value::list([style_assignment])),
        ],
    );

    let wall_placement = build(m, "IfcLocalPlacement", &[("RelativePlacement", world.into())]);
    let body = build(
        m,
        "IfcShapeRepresentation",
        &[
            ("ContextOfItems", context.into()),
            ("RepresentationIdentifier", "Body".into()),
            ("RepresentationType", "SweptSolid".into()),
            ("Items", Value::list([cylinder])),
        ],
    );
    let shape = build(
        m,
        "IfcProductDefinitionShape",
        &[("Representations", Value::list([body]))],
    );
    let wall = rooted(
        m,
        "IfcWall",
        "2KcxKeVfqHwhb6N5zdz5Bw",
        owner_history,
        "Wall",
        &[
            ("Description", "".into()),
            ("ObjectPlacement", wall_placement.into()),
            ("Representation", shape.into()),
        ],
    );

    let element = || ("CompositionType", Value::enumeration("ELEMENT"));
    let described = || ("Description", Value::from(""));
    let site = rooted(
        m,
        "IfcSite",
        "2KdG88VfqHwfDCN5zdz5Bw",
        owner_history,
        "Default Site",
        &[described(), element()],
    );
    rooted(
        m,
        "IfcRelAggregates",
        "2KdG89VfqHweGDN5zdz5Bw",
        owner_history,
        "ProjectLink",
        &[
            described(),
            ("RelatingObject", project.into()),
            ("RelatedObjects", Value::list([site])),
        ],
    );
    let building = rooted(
        m,
        "IfcBuilding",
        "2KdHMSVfqHwfiJN5zdz5Bw",
        owner_history,
        "Default Building",
        &[described(), element()],
    );
    rooted(
        m,
        "IfcRelAggregates",
        "2KdHMTVfqHwePlN5zdz5Bw",
        owner_history,
        "SiteLink",
        &[
            described(),
            ("RelatingObject", site.into()),
            ("RelatedObjects", Value::list([building])),
        ],
    );
    let storey = rooted(
        m,
        "IfcBuildingStorey",
        "2KdHMUVfqHwg4XN5zdz5Bw",
        owner_history,
        "Default Storey",
        &[described(), element()],
    );
    rooted(
        m,
        "IfcRelAggregates",
        "2KdHMVVfqHwhFMN5zdz5Bw",
        owner_history,
        "DefaultStoreyLink",
        &[
            described(),
            ("RelatingObject", building.into()),
            ("RelatedObjects", Value::list([storey])),
        ],
    );
    rooted(
        m,
        "IfcRelContainedInSpatialStructure",
        "2KdIamVfqHwf$aN5zdz5Bw",
        owner_history,
        "UnassignedObjectsLink",
        &[
            described(),
            ("RelatingStructure", storey.into()),
            ("RelatedElements", Value::list([wall])),
        ],
    );

    (model, project)
}
