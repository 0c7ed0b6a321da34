//! IFC2X3 entity declarations.
//!
//! A subset of the schema covering project structure, ownership, units,
//! placement, swept-solid geometry, surface styles and shape representations.
//! Supertypes precede their subtypes.

use crate::schema::{AttributeDef, EntityDef, InverseDef};

/// Schema identifier written to `FILE_SCHEMA`.
pub const SCHEMA_NAME: &str = "IFC2X3";

const fn req(name: &'static str) -> AttributeDef {
    AttributeDef::required(name)
}

const fn opt(name: &'static str) -> AttributeDef {
    AttributeDef::optional(name)
}

const fn agg(name: &'static str) -> AttributeDef {
    AttributeDef::aggregate(name)
}

const fn opt_agg(name: &'static str) -> AttributeDef {
    AttributeDef::optional_aggregate(name)
}

const fn inv(name: &'static str, source: &'static str, attribute: &'static str) -> InverseDef {
    InverseDef::new(name, source, attribute)
}

/// All declared entities, supertypes first.
pub static ENTITIES: &[EntityDef] = &[
    // Kernel
    EntityDef::new("IfcRoot").abstract_type().attributes(&[
        req("GlobalId"),
        req("OwnerHistory"),
        opt("Name"),
        opt("Description"),
    ]),
    EntityDef::new("IfcObjectDefinition")
        .subtype_of("IfcRoot")
        .abstract_type()
        .inverses(&[
            inv("IsDecomposedBy", "IfcRelDecomposes", "RelatingObject"),
            inv("Decomposes", "IfcRelDecomposes", "RelatedObjects"),
            inv("HasAssociations", "IfcRelAssociates", "RelatedObjects"),
        ]),
    EntityDef::new("IfcObject")
        .subtype_of("IfcObjectDefinition")
        .abstract_type()
        .attributes(&[opt("ObjectType")]),
    EntityDef::new("IfcProduct")
        .subtype_of("IfcObject")
        .abstract_type()
        .attributes(&[opt("ObjectPlacement"), opt("Representation")]),
    EntityDef::new("IfcProject")
        .subtype_of("IfcObject")
        .attributes(&[
            opt("LongName"),
            opt("Phase"),
            agg("RepresentationContexts"),
            req("UnitsInContext"),
        ]),
    EntityDef::new("IfcRelationship")
        .subtype_of("IfcRoot")
        .abstract_type(),
    EntityDef::new("IfcRelDecomposes")
        .subtype_of("IfcRelationship")
        .abstract_type()
        .attributes(&[req("RelatingObject"), agg("RelatedObjects")]),
    EntityDef::new("IfcRelAggregates").subtype_of("IfcRelDecomposes"),
    EntityDef::new("IfcRelConnects")
        .subtype_of("IfcRelationship")
        .abstract_type(),
    EntityDef::new("IfcRelAssociates")
        .subtype_of("IfcRelationship")
        .abstract_type()
        .attributes(&[agg("RelatedObjects")]),
    // Products
    EntityDef::new("IfcElement")
        .subtype_of("IfcProduct")
        .abstract_type()
        .attributes(&[opt("Tag")])
        .inverses(&[inv(
            "ContainedInStructure",
            "IfcRelContainedInSpatialStructure",
            "RelatedElements",
        )]),
    EntityDef::new("IfcBuildingElement")
        .subtype_of("IfcElement")
        .abstract_type(),
    EntityDef::new("IfcWall").subtype_of("IfcBuildingElement"),
    EntityDef::new("IfcColumn").subtype_of("IfcBuildingElement"),
    EntityDef::new("IfcBeam").subtype_of("IfcBuildingElement"),
    EntityDef::new("IfcSlab")
        .subtype_of("IfcBuildingElement")
        .attributes(&[opt("PredefinedType")]),
    EntityDef::new("IfcSpatialStructureElement")
        .subtype_of("IfcProduct")
        .abstract_type()
        .attributes(&[opt("LongName"), req("CompositionType")])
        .inverses(&[inv(
            "ContainsElements",
            "IfcRelContainedInSpatialStructure",
            "RelatingStructure",
        )]),
    EntityDef::new("IfcSite")
        .subtype_of("IfcSpatialStructureElement")
        .attributes(&[
            opt_agg("RefLatitude"),
            opt_agg("RefLongitude"),
            opt("RefElevation"),
            opt("LandTitleNumber"),
            opt("SiteAddress"),
        ]),
    EntityDef::new("IfcBuilding")
        .subtype_of("IfcSpatialStructureElement")
        .attributes(&[
            opt("ElevationOfRefHeight"),
            opt("ElevationOfTerrain"),
            opt("BuildingAddress"),
        ]),
    EntityDef::new("IfcBuildingStorey")
        .subtype_of("IfcSpatialStructureElement")
        .attributes(&[opt("Elevation")]),
    EntityDef::new("IfcRelContainedInSpatialStructure")
        .subtype_of("IfcRelConnects")
        .attributes(&[agg("RelatedElements"), req("RelatingStructure")]),
    // Materials
    EntityDef::new("IfcMaterial").attributes(&[req("Name")]),
    EntityDef::new("IfcRelAssociatesMaterial")
        .subtype_of("IfcRelAssociates")
        .attributes(&[req("RelatingMaterial")]),
    // Actors and ownership
    EntityDef::new("IfcPerson")
        .attributes(&[
            opt("Id"),
            opt("FamilyName"),
            opt("GivenName"),
            opt_agg("MiddleNames"),
            opt_agg("PrefixTitles"),
            opt_agg("SuffixTitles"),
            opt_agg("Roles"),
            opt_agg("Addresses"),
        ])
        .inverses(&[inv("EngagedIn", "IfcPersonAndOrganization", "ThePerson")]),
    EntityDef::new("IfcOrganization")
        .attributes(&[
            opt("Id"),
            req("Name"),
            opt("Description"),
            opt_agg("Roles"),
            opt_agg("Addresses"),
        ])
        .inverses(&[inv("Engages", "IfcPersonAndOrganization", "TheOrganization")]),
    EntityDef::new("IfcPersonAndOrganization").attributes(&[
        req("ThePerson"),
        req("TheOrganization"),
        opt_agg("Roles"),
    ]),
    EntityDef::new("IfcApplication").attributes(&[
        req("ApplicationDeveloper"),
        req("Version"),
        req("ApplicationFullName"),
        req("ApplicationIdentifier"),
    ]),
    EntityDef::new("IfcOwnerHistory").attributes(&[
        req("OwningUser"),
        req("OwningApplication"),
        opt("State"),
        req("ChangeAction"),
        opt("LastModifiedDate"),
        opt("LastModifyingUser"),
        opt("LastModifyingApplication"),
        req("CreationDate"),
    ]),
    // Geometry
    EntityDef::new("IfcRepresentationItem")
        .abstract_type()
        .inverses(&[inv("StyledByItem", "IfcStyledItem", "Item")]),
    EntityDef::new("IfcGeometricRepresentationItem")
        .subtype_of("IfcRepresentationItem")
        .abstract_type(),
    EntityDef::new("IfcPoint")
        .subtype_of("IfcGeometricRepresentationItem")
        .abstract_type(),
    EntityDef::new("IfcCartesianPoint")
        .subtype_of("IfcPoint")
        .attributes(&[agg("Coordinates")]),
    EntityDef::new("IfcDirection")
        .subtype_of("IfcGeometricRepresentationItem")
        .attributes(&[agg("DirectionRatios")]),
    EntityDef::new("IfcPlacement")
        .subtype_of("IfcGeometricRepresentationItem")
        .abstract_type()
        .attributes(&[req("Location")]),
    EntityDef::new("IfcAxis2Placement2D")
        .subtype_of("IfcPlacement")
        .attributes(&[opt("RefDirection")]),
    EntityDef::new("IfcAxis2Placement3D")
        .subtype_of("IfcPlacement")
        .attributes(&[opt("Axis"), opt("RefDirection")]),
    EntityDef::new("IfcObjectPlacement")
        .abstract_type()
        .inverses(&[
            inv("PlacesObject", "IfcProduct", "ObjectPlacement"),
            inv("ReferencedByPlacements", "IfcLocalPlacement", "PlacementRelTo"),
        ]),
    EntityDef::new("IfcLocalPlacement")
        .subtype_of("IfcObjectPlacement")
        .attributes(&[opt("PlacementRelTo"), req("RelativePlacement")]),
    EntityDef::new("IfcRepresentationContext")
        .attributes(&[opt("ContextIdentifier"), opt("ContextType")]),
    EntityDef::new("IfcGeometricRepresentationContext")
        .subtype_of("IfcRepresentationContext")
        .attributes(&[
            req("CoordinateSpaceDimension"),
            opt("Precision"),
            req("WorldCoordinateSystem"),
            opt("TrueNorth"),
        ]),
    // Units
    EntityDef::new("IfcDimensionalExponents").attributes(&[
        req("LengthExponent"),
        req("MassExponent"),
        req("TimeExponent"),
        req("ElectricCurrentExponent"),
        req("ThermodynamicTemperatureExponent"),
        req("AmountOfSubstanceExponent"),
        req("LuminousIntensityExponent"),
    ]),
    EntityDef::new("IfcNamedUnit")
        .abstract_type()
        .attributes(&[req("Dimensions"), req("UnitType")]),
    EntityDef::new("IfcSIUnit")
        .subtype_of("IfcNamedUnit")
        .attributes(&[opt("Prefix"), req("Name")])
        .derives(&["Dimensions"]),
    EntityDef::new("IfcConversionBasedUnit")
        .subtype_of("IfcNamedUnit")
        .attributes(&[req("Name"), req("ConversionFactor")]),
    EntityDef::new("IfcMeasureWithUnit")
        .attributes(&[req("ValueComponent"), req("UnitComponent")]),
    EntityDef::new("IfcUnitAssignment").attributes(&[agg("Units")]),
    // Profiles and solids
    EntityDef::new("IfcProfileDef").attributes(&[req("ProfileType"), opt("ProfileName")]),
    EntityDef::new("IfcParameterizedProfileDef")
        .subtype_of("IfcProfileDef")
        .abstract_type()
        .attributes(&[req("Position")]),
    EntityDef::new("IfcCircleProfileDef")
        .subtype_of("IfcParameterizedProfileDef")
        .attributes(&[req("Radius")]),
    EntityDef::new("IfcRectangleProfileDef")
        .subtype_of("IfcParameterizedProfileDef")
        .attributes(&[req("XDim"), req("YDim")]),
    EntityDef::new("IfcSolidModel")
        .subtype_of("IfcGeometricRepresentationItem")
        .abstract_type(),
    EntityDef::new("IfcSweptAreaSolid")
        .subtype_of("IfcSolidModel")
        .abstract_type()
        .attributes(&[req("SweptArea"), req("Position")]),
    EntityDef::new("IfcExtrudedAreaSolid")
        .subtype_of("IfcSweptAreaSolid")
        .attributes(&[req("ExtrudedDirection"), req("Depth")]),
    // Presentation
    EntityDef::new("IfcColourSpecification")
        .abstract_type()
        .attributes(&[opt("Name")]),
    EntityDef::new("IfcColourRgb")
        .subtype_of("IfcColourSpecification")
        .attributes(&[req("Red"), req("Green"), req("Blue")]),
    EntityDef::new("IfcSurfaceStyleShading").attributes(&[req("SurfaceColour")]),
    EntityDef::new("IfcSurfaceStyleRendering")
        .subtype_of("IfcSurfaceStyleShading")
        .attributes(&[
            opt("Transparency"),
            opt("DiffuseColour"),
            opt("TransmissionColour"),
            opt("DiffuseTransmissionColour"),
            opt("ReflectionColour"),
            opt("SpecularColour"),
            opt("SpecularHighlight"),
            req("ReflectanceMethod"),
        ]),
    EntityDef::new("IfcPresentationStyle")
        .abstract_type()
        .attributes(&[opt("Name")]),
    EntityDef::new("IfcSurfaceStyle")
        .subtype_of("IfcPresentationStyle")
        .attributes(&[req("Side"), agg("Styles")]),
    EntityDef::new("IfcPresentationStyleAssignment").attributes(&[agg("Styles")]),
    EntityDef::new("IfcStyledItem")
        .subtype_of("IfcRepresentationItem")
        .attributes(&[opt("Item"), agg("Styles"), opt("Name")]),
    // Representations
    EntityDef::new("IfcRepresentation")
        .attributes(&[
            req("ContextOfItems"),
            opt("RepresentationIdentifier"),
            opt("RepresentationType"),
            agg("Items"),
        ])
        .inverses(&[inv(
            "OfProductRepresentation",
            "IfcProductRepresentation",
            "Representations",
        )]),
    EntityDef::new("IfcShapeModel")
        .subtype_of("IfcRepresentation")
        .abstract_type(),
    EntityDef::new("IfcShapeRepresentation").subtype_of("IfcShapeModel"),
    EntityDef::new("IfcProductRepresentation").attributes(&[
        opt("Name"),
        opt("Description"),
        agg("Representations"),
    ]),
    EntityDef::new("IfcProductDefinitionShape")
        .subtype_of("IfcProductRepresentation")
        .inverses(&[inv("ShapeOfProduct", "IfcProduct", "Representation")]),
];
